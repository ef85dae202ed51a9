//! # Key Derivation
//!
//! Turns an arbitrary-length passphrase into cipher key material.
//!
//! ## Modules
//!
//! - [`strength`] - [`KeyStrength`] and its hash/cipher selection table
//! - [`derive`] - [`derive_key_material`], producing key, IV and cipher
//!
//! ## Usage
//!
//! Most callers go through [`MagicCrypt`](crate::MagicCrypt), which derives
//! and builds the cipher in one step. These functions are exposed for
//! callers that want the raw material, e.g. to build a
//! [`Crypt`](crate::crypt::Crypt) directly.

pub mod derive;
pub mod strength;

pub use derive::{derive_key_material, derive_key_material_bits, DerivedKey};
pub use strength::KeyStrength;
