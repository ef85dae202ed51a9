//! # MagicCrypt Facade
//!
//! Passphrase in, keyed cipher out. [`MagicCrypt`] runs the key derivation
//! once and then offers encryption and decryption over raw bytes, UTF-8
//! text (Base64 on the ciphertext side), streams and files.
//!
//! ```no_run
//! use magiccrypt_rs::{KeyStrength, MagicCrypt};
//!
//! let mc = MagicCrypt::new("magickey", KeyStrength::Bits256, None)?;
//! let base64 = mc.encrypt_str_to_base64("http://magiclen.org");
//! assert_eq!(base64, "DS/2U8royDnJDiNY2ps3f6ZoTbpZo8ZtUGYLGEjwLDQ=");
//! assert_eq!(mc.decrypt_base64_to_string(&base64)?, "http://magiclen.org");
//! # Ok::<(), magiccrypt_rs::MagicCryptError>(())
//! ```

use crate::aliases::PasswordString;
use crate::crypt::{CipherAlgorithm, Crypt};
use crate::error::MagicCryptError;
use crate::kdf::{derive_key_material, KeyStrength};
use crate::listener::CryptListener;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Passphrase-keyed DES/AES-CBC encryptor/decryptor.
#[derive(Debug)]
pub struct MagicCrypt {
    strength: KeyStrength,
    crypt: Crypt,
}

impl MagicCrypt {
    /// Derive a key from `key` at `strength`, with an optional IV seed.
    ///
    /// See [`KeyStrength`] for which hash and cipher each strength uses.
    pub fn new(
        key: impl AsRef<str>,
        strength: KeyStrength,
        iv: Option<&str>,
    ) -> Result<Self, MagicCryptError> {
        let derived = derive_key_material(key.as_ref(), strength, iv)?;
        let crypt = Crypt::from_derived(&derived)?;
        debug!(%strength, algorithm = %crypt.algorithm(), "cipher keyed");
        Ok(Self { strength, crypt })
    }

    /// Like [`new`](Self::new), with the strength given in bits.
    ///
    /// # Errors
    ///
    /// [`MagicCryptError::InvalidParameter`] unless `bits` is 64, 128, 192 or 256.
    pub fn with_bits(
        key: impl AsRef<str>,
        bits: u16,
        iv: Option<&str>,
    ) -> Result<Self, MagicCryptError> {
        Self::new(key, KeyStrength::try_from(bits)?, iv)
    }

    /// Like [`new`](Self::new), taking the passphrase and IV seed as secure strings.
    pub fn from_secret(
        key: &PasswordString,
        strength: KeyStrength,
        iv: Option<&PasswordString>,
    ) -> Result<Self, MagicCryptError> {
        Self::new(
            key.expose_secret().as_str(),
            strength,
            iv.map(|seed| seed.expose_secret().as_str()),
        )
    }

    pub(crate) fn from_parts(strength: KeyStrength, crypt: Crypt) -> Self {
        Self { strength, crypt }
    }

    #[must_use]
    pub const fn key_strength(&self) -> KeyStrength {
        self.strength
    }

    #[must_use]
    pub const fn algorithm(&self) -> CipherAlgorithm {
        self.crypt.algorithm()
    }

    /// The underlying cipher wrapper.
    #[must_use]
    pub const fn crypt(&self) -> &Crypt {
        &self.crypt
    }

    // ── bytes ───────────────────────────────────────────────────────────────

    #[must_use]
    pub fn encrypt_bytes_to_bytes(&self, data: impl AsRef<[u8]>) -> Vec<u8> {
        self.crypt.encrypt_bytes(data.as_ref())
    }

    #[must_use]
    pub fn encrypt_str_to_bytes(&self, text: impl AsRef<str>) -> Vec<u8> {
        self.crypt.encrypt_bytes(text.as_ref().as_bytes())
    }

    pub fn decrypt_bytes_to_bytes(
        &self,
        data: impl AsRef<[u8]>,
    ) -> Result<Vec<u8>, MagicCryptError> {
        self.crypt.decrypt_bytes(data.as_ref())
    }

    // ── text ────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn encrypt_bytes_to_base64(&self, data: impl AsRef<[u8]>) -> String {
        STANDARD.encode(self.crypt.encrypt_bytes(data.as_ref()))
    }

    #[must_use]
    pub fn encrypt_str_to_base64(&self, text: impl AsRef<str>) -> String {
        self.encrypt_bytes_to_base64(text.as_ref().as_bytes())
    }

    pub fn decrypt_base64_to_bytes(
        &self,
        base64: impl AsRef<str>,
    ) -> Result<Vec<u8>, MagicCryptError> {
        let data = STANDARD.decode(base64.as_ref())?;
        self.crypt.decrypt_bytes(&data)
    }

    /// # Errors
    ///
    /// Besides the errors of [`decrypt_base64_to_bytes`](Self::decrypt_base64_to_bytes),
    /// [`MagicCryptError::UnsupportedEncoding`] when the plaintext is not UTF-8.
    pub fn decrypt_base64_to_string(
        &self,
        base64: impl AsRef<str>,
    ) -> Result<String, MagicCryptError> {
        Ok(String::from_utf8(self.decrypt_base64_to_bytes(base64)?)?)
    }

    // ── streams ─────────────────────────────────────────────────────────────

    /// Encrypt a stream of unknown length. Returns plaintext bytes consumed.
    pub fn encrypt_reader_to_writer<R, W>(
        &self,
        source: &mut R,
        destination: &mut W,
    ) -> Result<u64, MagicCryptError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.crypt.encrypt_reader_to_writer(source, destination, None, None)
    }

    /// Decrypt a stream of unknown length. Returns ciphertext bytes consumed.
    pub fn decrypt_reader_to_writer<R, W>(
        &self,
        source: &mut R,
        destination: &mut W,
    ) -> Result<u64, MagicCryptError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.crypt.decrypt_reader_to_writer(source, destination, None, None)
    }

    /// Encrypt a stream with progress reporting and cancellation.
    pub fn encrypt_reader_to_writer_with_listener<R, W>(
        &self,
        source: &mut R,
        destination: &mut W,
        total: Option<u64>,
        listener: &mut dyn CryptListener,
    ) -> Result<u64, MagicCryptError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.crypt
            .encrypt_reader_to_writer(source, destination, total, Some(listener))
    }

    /// Decrypt a stream with progress reporting and cancellation.
    pub fn decrypt_reader_to_writer_with_listener<R, W>(
        &self,
        source: &mut R,
        destination: &mut W,
        total: Option<u64>,
        listener: &mut dyn CryptListener,
    ) -> Result<u64, MagicCryptError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.crypt
            .decrypt_reader_to_writer(source, destination, total, Some(listener))
    }

    // ── files ───────────────────────────────────────────────────────────────

    /// Encrypt the file at `source` into a new file at `destination`.
    ///
    /// The listener sees the source file's length as the total. On error or
    /// cancellation `destination` keeps whatever was written.
    pub fn encrypt_file(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        listener: Option<&mut dyn CryptListener>,
    ) -> Result<u64, MagicCryptError> {
        let (mut reader, mut writer, total) = open_pair(source.as_ref(), destination.as_ref())?;
        self.crypt
            .encrypt_reader_to_writer(&mut reader, &mut writer, Some(total), listener)
    }

    /// Decrypt the file at `source` into a new file at `destination`.
    pub fn decrypt_file(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        listener: Option<&mut dyn CryptListener>,
    ) -> Result<u64, MagicCryptError> {
        let (mut reader, mut writer, total) = open_pair(source.as_ref(), destination.as_ref())?;
        self.crypt
            .decrypt_reader_to_writer(&mut reader, &mut writer, Some(total), listener)
    }
}

fn open_pair(
    source: &Path,
    destination: &Path,
) -> Result<(BufReader<File>, BufWriter<File>, u64), MagicCryptError> {
    let input = File::open(source)?;
    let total = input.metadata()?.len();
    let output = File::create(destination)?;
    Ok((BufReader::new(input), BufWriter::new(output), total))
}
