//! src/crypt/primitive.rs
//! Single-block DES/AES transforms from the RustCrypto `des` and `aes` crates.

use crate::consts::{AES_BLOCK_SIZE, AES_KEY_LENGTHS, DES_BLOCK_SIZE, DES_KEY_LENGTH};
use crate::crypt::CipherAlgorithm;
use crate::error::MagicCryptError;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use des::Des;

/// A keyed block cipher. The AES variant is picked by key length.
pub enum BlockPrimitive {
    Des(Des),
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockPrimitive {
    /// Key the cipher for `algorithm`.
    ///
    /// DES takes exactly 8 bytes (parity bits are ignored); AES takes 16, 24
    /// or 32. Anything else is [`MagicCryptError::InvalidKeyMaterial`].
    pub fn new(algorithm: CipherAlgorithm, key: &[u8]) -> Result<Self, MagicCryptError> {
        let invalid = |_| {
            MagicCryptError::InvalidKeyMaterial(format!(
                "{algorithm} key cannot be {} bytes",
                key.len()
            ))
        };

        match (algorithm, key.len()) {
            (CipherAlgorithm::DesCbc, DES_KEY_LENGTH) => {
                Ok(Self::Des(Des::new_from_slice(key).map_err(invalid)?))
            }
            (CipherAlgorithm::DesCbc, _) => Err(MagicCryptError::InvalidKeyMaterial(
                "the DES key must be 8 bytes (64 bits)".into(),
            )),
            (CipherAlgorithm::AesCbc, 16) => {
                Ok(Self::Aes128(Aes128::new_from_slice(key).map_err(invalid)?))
            }
            (CipherAlgorithm::AesCbc, 24) => {
                Ok(Self::Aes192(Aes192::new_from_slice(key).map_err(invalid)?))
            }
            (CipherAlgorithm::AesCbc, 32) => {
                Ok(Self::Aes256(Aes256::new_from_slice(key).map_err(invalid)?))
            }
            (CipherAlgorithm::AesCbc, _) => Err(MagicCryptError::InvalidKeyMaterial(format!(
                "the AES key must be one of {AES_KEY_LENGTHS:?} bytes, got {}",
                key.len()
            ))),
        }
    }

    #[must_use]
    pub const fn block_size(&self) -> usize {
        match self {
            Self::Des(_) => DES_BLOCK_SIZE,
            _ => AES_BLOCK_SIZE,
        }
    }

    /// Encrypt one block in place. `block.len()` must equal [`block_size`](Self::block_size).
    #[inline(always)]
    pub fn encrypt_block(&self, block: &mut [u8]) {
        match self {
            Self::Des(c) => c.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes128(c) => c.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes192(c) => c.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes256(c) => c.encrypt_block(GenericArray::from_mut_slice(block)),
        }
    }

    /// Decrypt one block in place. `block.len()` must equal [`block_size`](Self::block_size).
    #[inline(always)]
    pub fn decrypt_block(&self, block: &mut [u8]) {
        match self {
            Self::Des(c) => c.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes128(c) => c.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes192(c) => c.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes256(c) => c.decrypt_block(GenericArray::from_mut_slice(block)),
        }
    }
}
