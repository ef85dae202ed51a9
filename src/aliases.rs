//! # Secure-Gate Type Aliases
//!
//! Type aliases for secret-bearing buffers, built on [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Every alias zeroizes on drop and needs an explicit `.expose_secret()` to read.
//!
//! ## Dynamic secrets
//! - [`PasswordString`] - passphrase or IV seed as typed by the user
//! - [`KeyBytes`] - derived cipher key (8, 16, 24 or 32 bytes)
//! - [`IvBytes`] - CBC initialization vector (8 or 16 bytes)
//! - [`ChunkBuffer`] - plaintext/ciphertext staging buffer for the stream loop
//!   and the CBC carry-over

use secure_gate::Dynamic;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordString = Dynamic<String>;
pub type KeyBytes = Dynamic<Vec<u8>>;
pub type IvBytes = Dynamic<Vec<u8>>;
pub type ChunkBuffer = Dynamic<Vec<u8>>;

