//! src/batch_ops.rs
//! Parallel encryption/decryption of independent stream pairs (`batch-ops` feature).
//!
//! One [`MagicCrypt`] is shared by every worker; each pair gets its own
//! chaining state, so no locking is needed.

use rayon::prelude::*;
use std::io::{Read, Write};

use crate::{MagicCrypt, MagicCryptError};

/// Encrypt every `(source, destination)` pair in parallel.
///
/// Returns the plaintext byte count per pair, in input order. The first
/// error aborts the batch; pairs already finished keep their output.
pub fn encrypt_batch<R, W>(
    batch: &mut [(R, W)],
    crypt: &MagicCrypt,
) -> Result<Vec<u64>, MagicCryptError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .map(|(src, dst)| crypt.encrypt_reader_to_writer(src, dst))
        .collect()
}

/// Decrypt every `(source, destination)` pair in parallel.
pub fn decrypt_batch<R, W>(
    batch: &mut [(R, W)],
    crypt: &MagicCrypt,
) -> Result<Vec<u64>, MagicCryptError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .map(|(src, dst)| crypt.decrypt_reader_to_writer(src, dst))
        .collect()
}
