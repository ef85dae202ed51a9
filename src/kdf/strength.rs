//! src/kdf/strength.rs

use crate::checksum::HashAlgorithm;
use crate::crypt::CipherAlgorithm;
use crate::error::MagicCryptError;
use std::fmt;

/// Requested key strength in bits.
///
/// The strength picks the key hash, the cipher and the IV hash:
///
/// | strength | key hash  | cipher  | IV hash   |
/// |----------|-----------|---------|-----------|
/// | 64       | CRC-64 (LSB-first) | DES-CBC | CRC-64 (LSB-first) |
/// | 128      | MD5       | AES-128 | MD5 |
/// | 192      | Tiger     | AES-192 | MD5 |
/// | 256      | SHA-256   | AES-256 | MD5 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyStrength {
    Bits64,
    #[default]
    Bits128,
    Bits192,
    Bits256,
}

impl KeyStrength {
    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            KeyStrength::Bits64 => 64,
            KeyStrength::Bits128 => 128,
            KeyStrength::Bits192 => 192,
            KeyStrength::Bits256 => 256,
        }
    }

    /// Key length in bytes.
    #[must_use]
    pub const fn key_len(self) -> usize {
        self.bits() as usize / 8
    }

    #[must_use]
    pub const fn key_hash(self) -> HashAlgorithm {
        match self {
            KeyStrength::Bits64 => HashAlgorithm::Crc64Lsb,
            KeyStrength::Bits128 => HashAlgorithm::Md5,
            KeyStrength::Bits192 => HashAlgorithm::Tiger,
            KeyStrength::Bits256 => HashAlgorithm::Sha256,
        }
    }

    #[must_use]
    pub const fn iv_hash(self) -> HashAlgorithm {
        match self {
            KeyStrength::Bits64 => HashAlgorithm::Crc64Lsb,
            _ => HashAlgorithm::Md5,
        }
    }

    #[must_use]
    pub const fn algorithm(self) -> CipherAlgorithm {
        match self {
            KeyStrength::Bits64 => CipherAlgorithm::DesCbc,
            _ => CipherAlgorithm::AesCbc,
        }
    }
}

impl TryFrom<u16> for KeyStrength {
    type Error = MagicCryptError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        match bits {
            64 => Ok(KeyStrength::Bits64),
            128 => Ok(KeyStrength::Bits128),
            192 => Ok(KeyStrength::Bits192),
            256 => Ok(KeyStrength::Bits256),
            other => Err(MagicCryptError::InvalidParameter(format!(
                "key strength must be 64, 128, 192 or 256 bits, got {other}"
            ))),
        }
    }
}

impl From<KeyStrength> for u16 {
    fn from(strength: KeyStrength) -> Self {
        strength.bits()
    }
}

impl fmt::Display for KeyStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
