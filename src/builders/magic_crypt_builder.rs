//! src/builders/magic_crypt_builder.rs
//! Fluent construction of [`MagicCrypt`] with strength, IV seed and chunk size.

use crate::aliases::PasswordString;
use crate::consts::{BUFFER_SIZE, MIN_BUFFER_SIZE};
use crate::crypt::Crypt;
use crate::error::MagicCryptError;
use crate::kdf::{derive_key_material, KeyStrength};
use crate::MagicCrypt;

/// [`MagicCrypt`] builder
///
/// Defaults: [`KeyStrength::Bits128`], all-zero IV, [`BUFFER_SIZE`] chunks.
///
/// # Thread Safety
///
/// This type is `Send + Sync`. The passphrase and IV seed are held in
/// secure-gate buffers until [`build`](Self::build) consumes the builder.
pub struct MagicCryptBuilder {
    key: PasswordString,
    strength: KeyStrength,
    iv: Option<PasswordString>,
    buffer_size: usize,
}

impl MagicCryptBuilder {
    /// Start from a passphrase with default settings.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: PasswordString::new(key.into()),
            strength: KeyStrength::default(),
            iv: None,
            buffer_size: BUFFER_SIZE,
        }
    }

    #[must_use]
    pub fn with_strength(mut self, strength: KeyStrength) -> Self {
        self.strength = strength;
        self
    }

    /// Strength in bits. Anything but 64, 128, 192 or 256 is
    /// [`MagicCryptError::InvalidParameter`].
    pub fn with_bits(self, bits: u16) -> Result<Self, MagicCryptError> {
        Ok(self.with_strength(KeyStrength::try_from(bits)?))
    }

    /// Seed for the IV hash. An empty seed means the all-zero IV.
    #[must_use]
    pub fn with_iv(mut self, iv: impl Into<String>) -> Self {
        self.iv = Some(PasswordString::new(iv.into()));
        self
    }

    /// Stream chunk size in bytes (minimum 1). Also the cancellation granularity.
    #[must_use]
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(MIN_BUFFER_SIZE);
        self
    }

    #[must_use]
    pub const fn strength(&self) -> KeyStrength {
        self.strength
    }

    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Derive the key and build the cipher.
    pub fn build(self) -> Result<MagicCrypt, MagicCryptError> {
        let derived = derive_key_material(
            self.key.expose_secret(),
            self.strength,
            self.iv.as_ref().map(|seed| seed.expose_secret().as_str()),
        )?;
        let crypt = Crypt::from_derived(&derived)?.with_buffer_size(self.buffer_size);
        Ok(MagicCrypt::from_parts(self.strength, crypt))
    }
}
