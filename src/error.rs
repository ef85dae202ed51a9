//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, MagicCryptError>`](MagicCryptError).

use thiserror::Error;

/// The error type for all MagicCrypt operations.
///
/// Variants separate "fix your input" failures (parameters, key material,
/// malformed ciphertext) from failures of the underlying transport.
#[derive(Error, Debug)]
pub enum MagicCryptError {
    /// Unsupported key strength or hash algorithm name.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Key or IV length does not match the selected cipher.
    ///
    /// Raised while constructing a [`Crypt`](crate::crypt::Crypt), never
    /// in the middle of a stream.
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// I/O error from the source or destination stream.
    ///
    /// Wraps [`std::io::Error`] verbatim. Whatever was already written to
    /// the destination stays there.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The text transport could not represent the data, e.g. decrypted
    /// bytes are not valid UTF-8.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Malformed Base64 input on the text decryption path.
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Cryptographic failure while decrypting.
    ///
    /// Used when ciphertext is not a whole number of blocks or the
    /// PKCS#5 padding is malformed (usually a wrong key or IV).
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl From<std::string::FromUtf8Error> for MagicCryptError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        MagicCryptError::UnsupportedEncoding(format!("decrypted data is not UTF-8: {err}"))
    }
}
