// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod checksum;
pub mod consts;
pub mod crypt;
pub mod error;
pub mod kdf;
pub mod listener;
pub mod magic_crypt;
pub mod utils;

// High-level API
pub use builders::magic_crypt_builder::MagicCryptBuilder;
pub use error::MagicCryptError;
pub use kdf::KeyStrength;
pub use magic_crypt::MagicCrypt;

// Checksum engines
pub use checksum::{crc32, crc64_lsb, crc64_msb, tiger, HashAlgorithm};

pub use crypt::{CipherAlgorithm, Crypt};
pub use kdf::{derive_key_material, DerivedKey};
pub use listener::{CancelAfter, CryptListener, Progress};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
