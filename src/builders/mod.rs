//! # Builders
//!
//! This module provides builder patterns for constructing keyed ciphers.
//!
//! ## Modules
//!
//! - [`magic_crypt_builder`] - Builder for [`MagicCrypt`](crate::MagicCrypt)
//!
//! ## Usage
//!
//! Builders provide a fluent API with sensible defaults (128-bit key, zero
//! IV, 4096-byte chunks) and optional customization.

pub mod magic_crypt_builder;
