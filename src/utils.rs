// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use std::io::{self, Read};

/// XORs `other` into `block`, byte by byte.
///
/// Used for CBC chaining with both 8-byte (DES) and 16-byte (AES) blocks.
///
/// # Panics (by contract)
///
/// Panics if `other` is shorter than `block`. All callers pass a block and
/// a chaining value of the same cipher's block size.
#[inline(always)]
pub fn xor_in_place(block: &mut [u8], other: &[u8]) {
    let len = block.len();
    for (b, o) in block.iter_mut().zip(&other[..len]) {
        *b ^= *o;
    }
}

/// Reads until `buf` is full or the reader hits EOF.
///
/// Returns the number of bytes read; anything less than `buf.len()` means
/// EOF. `Interrupted` is retried, every other error is returned as-is.
#[inline]
pub fn read_chunk<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Whether `reader` is exhausted, found by reading a single byte.
///
/// A byte read this way is consumed and dropped. `Interrupted` is retried.
pub fn at_eof<R: Read + ?Sized>(reader: &mut R) -> io::Result<bool> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(n) => return Ok(n == 0),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
