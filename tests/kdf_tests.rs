//! tests/kdf_tests.rs
//! Passphrase → key/IV/cipher derivation

mod common;
use common::{TEST_BITS, TEST_PASSWORD};

use magiccrypt_rs::kdf::derive_key_material_bits;
use magiccrypt_rs::{derive_key_material, CipherAlgorithm, HashAlgorithm, KeyStrength, MagicCryptError};

// —————————————————————————————————————————————————————————————————————————————
// 1. Strength table
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn strength_selection_table() {
    let cases = [
        (KeyStrength::Bits64, HashAlgorithm::Crc64Lsb, CipherAlgorithm::DesCbc, HashAlgorithm::Crc64Lsb),
        (KeyStrength::Bits128, HashAlgorithm::Md5, CipherAlgorithm::AesCbc, HashAlgorithm::Md5),
        (KeyStrength::Bits192, HashAlgorithm::Tiger, CipherAlgorithm::AesCbc, HashAlgorithm::Md5),
        (KeyStrength::Bits256, HashAlgorithm::Sha256, CipherAlgorithm::AesCbc, HashAlgorithm::Md5),
    ];
    for (strength, key_hash, algorithm, iv_hash) in cases {
        assert_eq!(strength.key_hash(), key_hash, "{strength}");
        assert_eq!(strength.algorithm(), algorithm, "{strength}");
        assert_eq!(strength.iv_hash(), iv_hash, "{strength}");
        assert_eq!(strength.key_hash().output_len(), strength.key_len(), "{strength}");
    }
}

#[test]
fn strength_from_bits() {
    for &bits in TEST_BITS {
        let strength = KeyStrength::try_from(bits).unwrap();
        assert_eq!(strength.bits(), bits);
        assert_eq!(u16::from(strength), bits);
        assert_eq!(strength.to_string(), format!("{bits}-bit"));
    }
    assert_eq!(KeyStrength::default(), KeyStrength::Bits128);
}

#[test]
fn unsupported_strength_is_invalid_parameter() {
    for bits in [0u16, 32, 100, 127, 512] {
        match KeyStrength::try_from(bits) {
            Err(MagicCryptError::InvalidParameter(msg)) => {
                assert!(msg.contains(&bits.to_string()), "{msg}")
            }
            other => panic!("expected InvalidParameter for {bits}, got {other:?}"),
        }
        assert!(matches!(
            derive_key_material_bits(TEST_PASSWORD, bits, None),
            Err(MagicCryptError::InvalidParameter(_))
        ));
    }
}

// —————————————————————————————————————————————————————————————————————————————
// 2. Derived material
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn derived_key_known_values() {
    let cases = [
        (64, "1918d925371e013c"),
        (128, "e4efdf08a6197e85fc805a9ce2129374"),
        (192, "a08b787908ba93d2f41b8d533619237ceaa63b6e09f240de"),
        (256, "879e6022855270b8ccaffbbfe5c59d948876a9f6496bbbf804aa7b08bfc31aea"),
    ];
    for (bits, key_hex) in cases {
        let derived = derive_key_material_bits(TEST_PASSWORD, bits, None).unwrap();
        assert_eq!(hex::encode(derived.key.expose_secret()), key_hex, "{bits}");
        assert_eq!(derived.key.expose_secret().len(), usize::from(bits) / 8);
    }
}

#[test]
fn iv_seed_known_values() {
    let des = derive_key_material(TEST_PASSWORD, KeyStrength::Bits64, Some("magiciv")).unwrap();
    assert_eq!(hex::encode(des.iv.expose_secret()), "a6b0ff78ad95af4e");

    for strength in [KeyStrength::Bits128, KeyStrength::Bits192, KeyStrength::Bits256] {
        let aes = derive_key_material(TEST_PASSWORD, strength, Some("magiciv")).unwrap();
        assert_eq!(
            hex::encode(aes.iv.expose_secret()),
            "1e9cd879eeef22741c9f1b3f912158b7",
            "{strength}"
        );
    }
}

#[test]
fn absent_iv_is_all_zero_block() {
    for &bits in TEST_BITS {
        let derived = derive_key_material_bits(TEST_PASSWORD, bits, None).unwrap();
        let block = derived.algorithm.block_size();
        assert_eq!(derived.iv.expose_secret(), &vec![0u8; block], "{bits}");
    }
}

#[test]
fn empty_iv_seed_same_as_absent() {
    for &bits in TEST_BITS {
        let absent = derive_key_material_bits(TEST_PASSWORD, bits, None).unwrap();
        let empty = derive_key_material_bits(TEST_PASSWORD, bits, Some("")).unwrap();
        assert_eq!(absent.iv.expose_secret(), empty.iv.expose_secret(), "{bits}");
    }
}

#[test]
fn empty_passphrase_is_hash_of_empty_input() {
    for &bits in TEST_BITS {
        let strength = KeyStrength::try_from(bits).unwrap();
        let derived = derive_key_material("", strength, None).unwrap();
        assert_eq!(
            derived.key.expose_secret(),
            &strength.key_hash().hash(b""),
            "{strength}"
        );
    }
}

#[test]
fn derivation_is_deterministic() {
    let a = derive_key_material(TEST_PASSWORD, KeyStrength::Bits192, Some("seed")).unwrap();
    let b = derive_key_material(TEST_PASSWORD, KeyStrength::Bits192, Some("seed")).unwrap();
    assert_eq!(a.key.expose_secret(), b.key.expose_secret());
    assert_eq!(a.iv.expose_secret(), b.iv.expose_secret());
    assert_eq!(a.algorithm, b.algorithm);
}

#[test]
fn unicode_passphrase_hashed_as_utf8() {
    let pass = "パスワード🔐";
    let derived = derive_key_material(pass, KeyStrength::Bits256, None).unwrap();
    assert_eq!(
        derived.key.expose_secret(),
        &HashAlgorithm::Sha256.hash(pass.as_bytes())
    );
}

#[test]
fn derived_key_debug_is_redacted() {
    let derived = derive_key_material(TEST_PASSWORD, KeyStrength::Bits128, None).unwrap();
    let debug = format!("{derived:?}");
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("e4efdf08"));
}
