// src/crypt/mod.rs

//! Streaming cipher wrapper.
//!
//! Core API: [`Crypt`] for keyed encrypt/decrypt over byte slices and
//! `Read`/`Write` streams.
//! Building blocks: [`BlockPrimitive`] (DES/AES single-block transforms),
//! [`CbcEncryptor`]/[`CbcDecryptor`] (chaining + PKCS#5), and the shared
//! chunk loop in `stream`.

pub(crate) mod cbc;
pub(crate) mod primitive;
pub(crate) mod stream;
pub(crate) mod wrapper;

pub use cbc::{CbcDecryptor, CbcEncryptor, CipherCore, Direction};
pub use primitive::BlockPrimitive;
pub use wrapper::Crypt;

use crate::consts::{AES_BLOCK_SIZE, DES_BLOCK_SIZE};
use std::fmt;

/// The closed set of supported ciphers. Both run in CBC mode with PKCS#5
/// padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherAlgorithm {
    DesCbc,
    AesCbc,
}

impl CipherAlgorithm {
    /// Block size in bytes, which is also the required IV length.
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            CipherAlgorithm::DesCbc => DES_BLOCK_SIZE,
            CipherAlgorithm::AesCbc => AES_BLOCK_SIZE,
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherAlgorithm::DesCbc => f.write_str("DES/CBC/PKCS5Padding"),
            CipherAlgorithm::AesCbc => f.write_str("AES/CBC/PKCS5Padding"),
        }
    }
}
