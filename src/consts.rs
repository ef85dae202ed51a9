//! # Constants
//!
//! Sizes shared by the key derivation, the cipher wrapper and the stream loop.

/// Default chunk size for the stream loop, in bytes.
///
/// Each chunk is pushed through the cipher before the listener is polled,
/// so this is also the cancellation granularity.
pub const BUFFER_SIZE: usize = 4096;

/// Smallest chunk size accepted by [`MagicCryptBuilder::with_buffer_size`](crate::MagicCryptBuilder::with_buffer_size).
pub const MIN_BUFFER_SIZE: usize = 1;

/// DES block size (and DES IV length).
pub const DES_BLOCK_SIZE: usize = 8;

/// AES block size (and AES IV length).
pub const AES_BLOCK_SIZE: usize = 16;

/// DES key length (64-bit strength).
pub const DES_KEY_LENGTH: usize = 8;

/// Accepted AES key lengths: AES-128, AES-192, AES-256.
pub const AES_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// CRC32 and CRC64 digests are both surfaced as 8 bytes.
pub const CRC_DIGEST_LENGTH: usize = 8;

/// Tiger/192 digest length.
pub const TIGER_DIGEST_LENGTH: usize = 24;
