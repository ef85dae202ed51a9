//! tests/checksum_tests.rs
//! CRC32, both CRC64 variants and Tiger against reference vectors

mod common;
use common::{load_json_vectors, pattern_bytes};

use magiccrypt_rs::checksum::{Crc32, Crc64Lsb, Crc64Msb, Tiger};
use magiccrypt_rs::{crc32, crc64_lsb, crc64_msb, tiger, HashAlgorithm, MagicCryptError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ChecksumVector {
    input: String,
    crc32: String,
    crc64_msb: String,
    crc64_lsb: String,
    tiger: String,
    md5: String,
    sha256: String,
}

// —————————————————————————————————————————————————————————————————————————————
// 1. Published check values
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn crc32_check_value_widened_to_eight_bytes() {
    assert_eq!(
        crc32(b"123456789"),
        [0x00, 0x00, 0x00, 0x00, 0xCB, 0xF4, 0x39, 0x26]
    );
}

#[test]
fn crc64_msb_matches_crc64_we_check_value() {
    assert_eq!(hex::encode(crc64_msb(b"123456789")), "62ec59e3f1a4f00a");
}

#[test]
fn crc64_lsb_check_value() {
    assert_eq!(hex::encode(crc64_lsb(b"123456789")), "2b9c7ee4e2780c8a");
}

#[test]
fn tiger_reference_vectors() {
    let cases: &[(&[u8], &str)] = &[
        (b"", "3293ac630c13f0245f92bbb1766e16167a4e58492dde73f3"),
        (b"abc", "2aab1484e8c158f2bfb8c5ff41b57a525129131c957b5f93"),
        (b"Tiger", "dd00230799f5009fec6debc838bb6a27df2b9d6f110c7937"),
    ];
    for (input, expected) in cases {
        assert_eq!(hex::encode(tiger(input)), *expected, "input {input:?}");
    }
}

#[test]
fn json_vectors_all_algorithms() {
    let vectors: Vec<ChecksumVector> = load_json_vectors("checksum_vectors.json");
    assert!(!vectors.is_empty());

    for v in &vectors {
        let data = v.input.as_bytes();
        assert_eq!(hex::encode(crc32(data)), v.crc32, "crc32 {:?}", v.input);
        assert_eq!(hex::encode(crc64_msb(data)), v.crc64_msb, "crc64_msb {:?}", v.input);
        assert_eq!(hex::encode(crc64_lsb(data)), v.crc64_lsb, "crc64_lsb {:?}", v.input);
        assert_eq!(hex::encode(tiger(data)), v.tiger, "tiger {:?}", v.input);
        assert_eq!(hex::encode(HashAlgorithm::Md5.hash(data)), v.md5, "md5 {:?}", v.input);
        assert_eq!(
            hex::encode(HashAlgorithm::Sha256.hash(data)),
            v.sha256,
            "sha256 {:?}",
            v.input
        );
    }
}

// —————————————————————————————————————————————————————————————————————————————
// 2. Properties
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn checksums_are_deterministic() {
    let data = pattern_bytes(10_000, 7);
    assert_eq!(crc32(&data), crc32(&data));
    assert_eq!(crc64_msb(&data), crc64_msb(&data));
    assert_eq!(crc64_lsb(&data), crc64_lsb(&data));
    assert_eq!(tiger(&data), tiger(&data));
}

#[test]
fn crc64_variants_are_not_interchangeable() {
    for input in [&b"a"[..], b"123456789", b"magickey", b"hello world"] {
        assert_ne!(
            crc64_msb(input),
            crc64_lsb(input),
            "variants must diverge on {input:?}"
        );
    }
}

#[test]
fn empty_input_digests() {
    assert_eq!(crc32(b""), [0u8; 8]);
    assert_eq!(crc64_msb(b""), [0u8; 8]);
    assert_eq!(crc64_lsb(b""), [0u8; 8]);
    assert_eq!(tiger(b"").len(), 24);
}

#[test]
fn incremental_equals_one_shot() {
    let data = pattern_bytes(1_000, 99);
    for split in [0, 1, 7, 63, 64, 65, 500, 999, 1_000] {
        let (head, tail) = data.split_at(split);

        let mut c32 = Crc32::new();
        c32.update(head);
        c32.update(tail);
        assert_eq!(c32.finalize(), crc32(&data), "crc32 split {split}");

        let mut msb = Crc64Msb::new();
        msb.update(head);
        msb.update(tail);
        assert_eq!(msb.finalize(), crc64_msb(&data), "crc64_msb split {split}");

        let mut lsb = Crc64Lsb::new();
        lsb.update(head);
        lsb.update(tail);
        assert_eq!(lsb.finalize(), crc64_lsb(&data), "crc64_lsb split {split}");

        let mut t = Tiger::new();
        t.update(head);
        t.update(tail);
        assert_eq!(t.finalize(), tiger(&data), "tiger split {split}");
    }
}

#[test]
fn tiger_byte_at_a_time() {
    let data = pattern_bytes(200, 3);
    let mut t = Tiger::new();
    for b in &data {
        t.update(std::slice::from_ref(b));
    }
    assert_eq!(t.finalize(), tiger(&data));
}

#[test]
fn finalize_leaves_every_hasher_usable() {
    let data = pattern_bytes(300, 13);
    let (head, tail) = data.split_at(100);

    let mut c32 = Crc32::new();
    let mut msb = Crc64Msb::new();
    let mut lsb = Crc64Lsb::new();
    let mut t = Tiger::new();
    c32.update(head);
    msb.update(head);
    lsb.update(head);
    t.update(head);

    assert_eq!(c32.finalize(), crc32(head));
    assert_eq!(msb.finalize(), crc64_msb(head));
    assert_eq!(lsb.finalize(), crc64_lsb(head));
    assert_eq!(t.finalize(), tiger(head));
    assert_eq!(t.finalize(), t.finalize());

    c32.update(tail);
    msb.update(tail);
    lsb.update(tail);
    t.update(tail);

    assert_eq!(c32.finalize(), crc32(&data));
    assert_eq!(msb.finalize(), crc64_msb(&data));
    assert_eq!(lsb.finalize(), crc64_lsb(&data));
    assert_eq!(t.finalize(), tiger(&data));
}

#[test]
fn checksums_shared_across_threads() {
    let data = pattern_bytes(4_096, 11);
    let expected = (crc64_msb(&data), crc64_lsb(&data), tiger(&data));
    let data = &data;

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || (crc64_msb(data), crc64_lsb(data), tiger(data))))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

// —————————————————————————————————————————————————————————————————————————————
// 3. HashAlgorithm selector
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn hash_algorithm_output_lengths() {
    let cases = [
        (HashAlgorithm::Crc32, 8),
        (HashAlgorithm::Crc64Msb, 8),
        (HashAlgorithm::Crc64Lsb, 8),
        (HashAlgorithm::Tiger, 24),
        (HashAlgorithm::Md5, 16),
        (HashAlgorithm::Sha256, 32),
    ];
    for (algorithm, len) in cases {
        assert_eq!(algorithm.output_len(), len);
        assert_eq!(algorithm.hash(b"abc").len(), len, "{algorithm}");
    }
}

#[test]
fn hash_opt_absent_input_has_no_digest() {
    assert_eq!(HashAlgorithm::Crc32.hash_opt(None), None);
    assert_eq!(HashAlgorithm::Tiger.hash_opt(None), None);
    assert_eq!(
        HashAlgorithm::Crc64Lsb.hash_opt(Some(b"")),
        Some(vec![0u8; 8])
    );
}

#[test]
fn hash_algorithm_from_name() {
    let cases = [
        ("crc32", HashAlgorithm::Crc32),
        ("CRC64", HashAlgorithm::Crc64Lsb),
        ("crc64-lsb", HashAlgorithm::Crc64Lsb),
        ("CRC64_MSB", HashAlgorithm::Crc64Msb),
        ("crc64we", HashAlgorithm::Crc64Msb),
        ("tiger192", HashAlgorithm::Tiger),
        ("md5", HashAlgorithm::Md5),
        ("SHA-256", HashAlgorithm::Sha256),
        ("sha256", HashAlgorithm::Sha256),
    ];
    for (name, expected) in cases {
        assert_eq!(name.parse::<HashAlgorithm>().unwrap(), expected, "{name}");
    }

    for algorithm in [HashAlgorithm::Crc64Msb, HashAlgorithm::Tiger, HashAlgorithm::Sha256] {
        assert_eq!(algorithm.name().parse::<HashAlgorithm>().unwrap(), algorithm);
    }
}

#[test]
fn hash_algorithm_unknown_name_is_invalid_parameter() {
    match "whirlpool".parse::<HashAlgorithm>() {
        Err(MagicCryptError::InvalidParameter(msg)) => assert!(msg.contains("whirlpool")),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}
