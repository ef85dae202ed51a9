//! src/crypt/wrapper.rs
//! [`Crypt`]: a keyed DES/AES-CBC cipher over bytes and streams.

use crate::aliases::IvBytes;
use crate::consts::{BUFFER_SIZE, MIN_BUFFER_SIZE};
use crate::crypt::cbc::{CbcDecryptor, CbcEncryptor, CipherCore};
use crate::crypt::primitive::BlockPrimitive;
use crate::crypt::stream::crypt_stream;
use crate::crypt::CipherAlgorithm;
use crate::error::MagicCryptError;
use crate::kdf::DerivedKey;
use crate::listener::CryptListener;
use std::fmt;
use std::io::{Cursor, Read, Write};

/// A keyed cipher ready to encrypt or decrypt.
///
/// Key and IV lengths are checked once, in [`Crypt::new`]. Each operation
/// builds its own chaining state, so one `Crypt` can be shared across
/// threads and used for any number of concurrent operations.
pub struct Crypt {
    algorithm: CipherAlgorithm,
    primitive: BlockPrimitive,
    iv: IvBytes,
    buffer_size: usize,
}

impl fmt::Debug for Crypt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crypt")
            .field("algorithm", &self.algorithm)
            .field("buffer_size", &self.buffer_size)
            .finish_non_exhaustive()
    }
}

impl Crypt {
    /// Key a cipher.
    ///
    /// # Errors
    ///
    /// [`MagicCryptError::InvalidKeyMaterial`] if the key is not 8 bytes for
    /// DES or 16/24/32 bytes for AES, or the IV is not one block long.
    pub fn new(
        algorithm: CipherAlgorithm,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Self, MagicCryptError> {
        if iv.len() != algorithm.block_size() {
            return Err(MagicCryptError::InvalidKeyMaterial(format!(
                "the IV must be {} bytes ({} bits), got {}",
                algorithm.block_size(),
                algorithm.block_size() * 8,
                iv.len()
            )));
        }
        let primitive = BlockPrimitive::new(algorithm, key)?;

        Ok(Self {
            algorithm,
            primitive,
            iv: IvBytes::new(iv.to_vec()),
            buffer_size: BUFFER_SIZE,
        })
    }

    /// Key a cipher from [`derive_key_material`](crate::kdf::derive_key_material) output.
    pub fn from_derived(derived: &DerivedKey) -> Result<Self, MagicCryptError> {
        Self::new(
            derived.algorithm,
            derived.key.expose_secret(),
            derived.iv.expose_secret(),
        )
    }

    /// Set the stream chunk size (floor of 1 byte).
    #[must_use]
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(MIN_BUFFER_SIZE);
        self
    }

    #[must_use]
    pub const fn algorithm(&self) -> CipherAlgorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn encryptor(&self) -> CbcEncryptor<'_> {
        CbcEncryptor::new(&self.primitive, &self.iv)
    }

    pub fn decryptor(&self) -> CbcDecryptor<'_> {
        CbcDecryptor::new(&self.primitive, &self.iv)
    }

    /// Encrypt a whole buffer.
    #[must_use]
    pub fn encrypt_bytes(&self, data: &[u8]) -> Vec<u8> {
        let block_size = self.algorithm.block_size();
        let mut out = Vec::with_capacity(data.len() + block_size);
        let mut encryptor = self.encryptor();
        encryptor.update(data, &mut out);
        encryptor.finish_padded(&mut out);
        out
    }

    /// Decrypt a whole buffer.
    ///
    /// # Errors
    ///
    /// [`MagicCryptError::Crypto`] if `data` is not a positive multiple of the
    /// block size or the padding does not check out.
    pub fn decrypt_bytes(&self, data: &[u8]) -> Result<Vec<u8>, MagicCryptError> {
        let mut out = Vec::with_capacity(data.len());
        let mut decryptor = self.decryptor();
        decryptor.update(data, &mut out);
        decryptor.finish_unpadded(&mut out)?;
        Ok(out)
    }

    /// Encrypt a buffer through the stream loop, reporting progress.
    pub fn encrypt_bytes_with_listener(
        &self,
        data: &[u8],
        listener: Option<&mut dyn CryptListener>,
    ) -> Result<Vec<u8>, MagicCryptError> {
        let mut out = Vec::with_capacity(data.len() + self.algorithm.block_size());
        self.encrypt_reader_to_writer(
            &mut Cursor::new(data),
            &mut out,
            Some(data.len() as u64),
            listener,
        )?;
        Ok(out)
    }

    /// Decrypt a buffer through the stream loop, reporting progress.
    pub fn decrypt_bytes_with_listener(
        &self,
        data: &[u8],
        listener: Option<&mut dyn CryptListener>,
    ) -> Result<Vec<u8>, MagicCryptError> {
        let mut out = Vec::with_capacity(data.len());
        self.decrypt_reader_to_writer(
            &mut Cursor::new(data),
            &mut out,
            Some(data.len() as u64),
            listener,
        )?;
        Ok(out)
    }

    /// Encrypt everything `source` yields into `destination`.
    ///
    /// `total` is the size announced to the listener, `None` if unknown.
    /// Returns the number of plaintext bytes consumed.
    pub fn encrypt_reader_to_writer<R, W>(
        &self,
        source: &mut R,
        destination: &mut W,
        total: Option<u64>,
        listener: Option<&mut dyn CryptListener>,
    ) -> Result<u64, MagicCryptError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        crypt_stream(
            self.encryptor(),
            source,
            destination,
            total,
            self.buffer_size,
            listener,
        )
    }

    /// Decrypt everything `source` yields into `destination`.
    ///
    /// Returns the number of ciphertext bytes consumed.
    pub fn decrypt_reader_to_writer<R, W>(
        &self,
        source: &mut R,
        destination: &mut W,
        total: Option<u64>,
        listener: Option<&mut dyn CryptListener>,
    ) -> Result<u64, MagicCryptError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        crypt_stream(
            self.decryptor(),
            source,
            destination,
            total,
            self.buffer_size,
            listener,
        )
    }
}
