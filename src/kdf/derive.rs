//! src/kdf/derive.rs
//! Passphrase → (key, IV, cipher)

use crate::aliases::{IvBytes, KeyBytes};
use crate::crypt::CipherAlgorithm;
use crate::error::MagicCryptError;
use crate::kdf::KeyStrength;
use std::fmt;

/// Output of [`derive_key_material`].
///
/// Key and IV are secure-gate buffers: zeroized on drop, redacted in `Debug`.
pub struct DerivedKey {
    pub key: KeyBytes,
    pub iv: IvBytes,
    pub algorithm: CipherAlgorithm,
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// Derive key, IV and cipher choice from a passphrase.
///
/// - The passphrase is hashed as UTF-8; an empty passphrase is valid.
/// - `iv_seed = None` (or an empty seed) gives the all-zero IV for the
///   selected cipher's block size.
/// - Every digest already has the exact key/IV length for its strength, so
///   nothing is truncated.
pub fn derive_key_material(
    passphrase: &str,
    strength: KeyStrength,
    iv_seed: Option<&str>,
) -> Result<DerivedKey, MagicCryptError> {
    let algorithm = strength.algorithm();

    let key = strength.key_hash().hash(passphrase.as_bytes());
    if key.len() != strength.key_len() {
        return Err(MagicCryptError::InvalidKeyMaterial(format!(
            "{} digest is {} bytes, {strength} key needs {}",
            strength.key_hash(),
            key.len(),
            strength.key_len()
        )));
    }

    let iv = match iv_seed.filter(|seed| !seed.is_empty()) {
        Some(seed) => strength.iv_hash().hash(seed.as_bytes()),
        None => vec![0u8; algorithm.block_size()],
    };
    if iv.len() != algorithm.block_size() {
        return Err(MagicCryptError::InvalidKeyMaterial(format!(
            "{} IV must be {} bytes, got {}",
            algorithm,
            algorithm.block_size(),
            iv.len()
        )));
    }

    Ok(DerivedKey {
        key: KeyBytes::new(key),
        iv: IvBytes::new(iv),
        algorithm,
    })
}

/// Like [`derive_key_material`], with the strength given in bits.
///
/// Any value other than 64, 128, 192 or 256 fails with
/// [`MagicCryptError::InvalidParameter`] before anything is hashed.
pub fn derive_key_material_bits(
    passphrase: &str,
    bits: u16,
    iv_seed: Option<&str>,
) -> Result<DerivedKey, MagicCryptError> {
    let strength = KeyStrength::try_from(bits)?;
    derive_key_material(passphrase, strength, iv_seed)
}
