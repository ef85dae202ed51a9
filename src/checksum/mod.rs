//! # Checksum Engines
//!
//! Pure digest functions used to turn passphrases into key material.
//!
//! ## Modules
//!
//! - [`crc32`] - CRC-32, widened to 8 bytes
//! - [`crc64`] - two distinct CRC-64 variants ([`Crc64Msb`], [`Crc64Lsb`])
//! - [`tiger`] - Tiger/192
//!
//! MD5 and SHA-256 come from the `md-5` and `sha2` crates and are reachable
//! through [`HashAlgorithm`] alongside the in-crate engines.
//!
//! All lookup tables are `static` and never mutated, so every function here
//! can be called from any number of threads at once.

pub mod crc32;
pub mod crc64;
pub mod tiger;
mod tiger_sboxes;

pub use crc32::{crc32, Crc32};
pub use crc64::{crc64_lsb, crc64_msb, Crc64Lsb, Crc64Msb};
pub use tiger::{tiger, Tiger};

use crate::consts::{CRC_DIGEST_LENGTH, TIGER_DIGEST_LENGTH};
use crate::error::MagicCryptError;
use md5::Md5;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Every digest the key derivation can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Crc32,
    /// CRC-64 variant A, MSB first.
    Crc64Msb,
    /// CRC-64 variant B, LSB first.
    Crc64Lsb,
    Tiger,
    Md5,
    Sha256,
}

impl HashAlgorithm {
    /// Digest length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Crc32 | HashAlgorithm::Crc64Msb | HashAlgorithm::Crc64Lsb => {
                CRC_DIGEST_LENGTH
            }
            HashAlgorithm::Tiger => TIGER_DIGEST_LENGTH,
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha256 => 32,
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Crc32 => "CRC32",
            HashAlgorithm::Crc64Msb => "CRC64-MSB",
            HashAlgorithm::Crc64Lsb => "CRC64-LSB",
            HashAlgorithm::Tiger => "TIGER",
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha256 => "SHA-256",
        }
    }

    /// Digest of `data`.
    #[must_use]
    pub fn hash(self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Crc32 => crc32(data).to_vec(),
            HashAlgorithm::Crc64Msb => crc64_msb(data).to_vec(),
            HashAlgorithm::Crc64Lsb => crc64_lsb(data).to_vec(),
            HashAlgorithm::Tiger => tiger(data).to_vec(),
            HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        }
    }

    /// Like [`hash`](Self::hash), but an absent input yields no digest
    /// instead of the digest of the empty message.
    #[must_use]
    pub fn hash_opt(self, data: Option<&[u8]>) -> Option<Vec<u8>> {
        data.map(|d| self.hash(d))
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = MagicCryptError;

    /// Case-insensitive; dashes and underscores are ignored, so `"sha256"`,
    /// `"SHA-256"` and `"Sha_256"` all parse. Plain `"crc64"` selects the
    /// LSB-first variant used for key derivation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match normalized.as_str() {
            "CRC32" => Ok(HashAlgorithm::Crc32),
            "CRC64MSB" | "CRC64WE" => Ok(HashAlgorithm::Crc64Msb),
            "CRC64LSB" | "CRC64" => Ok(HashAlgorithm::Crc64Lsb),
            "TIGER" | "TIGER192" => Ok(HashAlgorithm::Tiger),
            "MD5" => Ok(HashAlgorithm::Md5),
            "SHA256" => Ok(HashAlgorithm::Sha256),
            _ => Err(MagicCryptError::InvalidParameter(format!(
                "unsupported hash algorithm: {s:?}"
            ))),
        }
    }
}
