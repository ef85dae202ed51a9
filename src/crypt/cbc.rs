//! src/crypt/cbc.rs
//! CBC chaining with PKCS#5 padding over a [`BlockPrimitive`].
//!
//! Both directions accept input in arbitrary pieces and emit whole blocks.
//! The decryptor always holds back the last complete block, since it might
//! carry the padding.

use crate::aliases::{ChunkBuffer, IvBytes};
use crate::crypt::primitive::BlockPrimitive;
use crate::error::MagicCryptError;
use crate::utils::xor_in_place;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// The capability the stream loop drives: feed bytes, then finish once.
pub trait CipherCore {
    fn direction(&self) -> Direction;

    /// Process `input`, appending every block that is ready to `out`.
    fn update(&mut self, input: &[u8], out: &mut Vec<u8>);

    /// Flush the tail into `out`.
    ///
    /// `cancelled` tells the core the input was cut short by the caller
    /// rather than by EOF.
    fn finish(self, out: &mut Vec<u8>, cancelled: bool) -> Result<(), MagicCryptError>;
}

struct Chain<'a> {
    primitive: &'a BlockPrimitive,
    block_size: usize,
    prev: IvBytes,
    pending: ChunkBuffer,
}

impl<'a> Chain<'a> {
    fn new(primitive: &'a BlockPrimitive, iv: &IvBytes) -> Self {
        let block_size = primitive.block_size();
        Self {
            primitive,
            block_size,
            prev: IvBytes::new(iv.expose_secret().clone()),
            pending: ChunkBuffer::new(Vec::with_capacity(block_size * 2)),
        }
    }

    fn encrypt_block(&mut self, block: &mut [u8]) {
        let prev = self.prev.expose_secret_mut();
        xor_in_place(block, prev);
        self.primitive.encrypt_block(block);
        prev.copy_from_slice(block);
    }

    fn decrypt_block(&mut self, block: &mut [u8]) {
        let mut ciphertext = [0u8; 16];
        let ciphertext = &mut ciphertext[..self.block_size];
        ciphertext.copy_from_slice(block);

        self.primitive.decrypt_block(block);
        let prev = self.prev.expose_secret_mut();
        xor_in_place(block, prev);
        prev.copy_from_slice(ciphertext);
    }

    /// Run every complete block of `pending` except the last `keep` bytes.
    fn drain(&mut self, keep: usize, direction: Direction, out: &mut Vec<u8>) {
        let ready = self.pending.expose_secret().len() - keep;
        if ready == 0 {
            return;
        }

        let start = out.len();
        out.extend_from_slice(&self.pending.expose_secret()[..ready]);
        self.pending.expose_secret_mut().drain(..ready);

        let block_size = self.block_size;
        for block in out[start..].chunks_exact_mut(block_size) {
            match direction {
                Direction::Encrypt => self.encrypt_block(block),
                Direction::Decrypt => self.decrypt_block(block),
            }
        }
    }
}

/// CBC-PKCS#5 encryptor.
pub struct CbcEncryptor<'a> {
    chain: Chain<'a>,
}

impl<'a> CbcEncryptor<'a> {
    pub fn new(primitive: &'a BlockPrimitive, iv: &IvBytes) -> Self {
        Self {
            chain: Chain::new(primitive, iv),
        }
    }

    /// Pad and encrypt the final block. Always appends exactly one block.
    pub fn finish_padded(mut self, out: &mut Vec<u8>) {
        let block_size = self.chain.block_size;
        let pending = self.chain.pending.expose_secret_mut();
        let pad = block_size - pending.len();
        pending.resize(block_size, pad as u8);
        self.chain.drain(0, Direction::Encrypt, out);
    }
}

impl CipherCore for CbcEncryptor<'_> {
    fn direction(&self) -> Direction {
        Direction::Encrypt
    }

    fn update(&mut self, input: &[u8], out: &mut Vec<u8>) {
        self.chain.pending.expose_secret_mut().extend_from_slice(input);
        let keep = self.chain.pending.expose_secret().len() % self.chain.block_size;
        self.chain.drain(keep, Direction::Encrypt, out);
    }

    // A cancelled encryption is padded like a finished one, so the output is
    // a complete ciphertext of the bytes consumed so far.
    fn finish(self, out: &mut Vec<u8>, _cancelled: bool) -> Result<(), MagicCryptError> {
        self.finish_padded(out);
        Ok(())
    }
}

/// CBC-PKCS#5 decryptor.
pub struct CbcDecryptor<'a> {
    chain: Chain<'a>,
}

impl<'a> CbcDecryptor<'a> {
    pub fn new(primitive: &'a BlockPrimitive, iv: &IvBytes) -> Self {
        Self {
            chain: Chain::new(primitive, iv),
        }
    }

    /// Decrypt the held-back block and strip its padding.
    pub fn finish_unpadded(mut self, out: &mut Vec<u8>) -> Result<(), MagicCryptError> {
        let block_size = self.chain.block_size;
        if self.chain.pending.expose_secret().len() != block_size {
            return Err(MagicCryptError::Crypto(format!(
                "ciphertext length is not a positive multiple of {block_size} bytes"
            )));
        }

        let start = out.len();
        self.chain.drain(0, Direction::Decrypt, out);

        let pad = usize::from(out[out.len() - 1]);
        let valid = (1..=block_size).contains(&pad)
            && out[out.len() - pad..].iter().all(|&b| usize::from(b) == pad);
        if !valid {
            out.truncate(start);
            return Err(MagicCryptError::Crypto(
                "invalid padding (wrong key or IV?)".into(),
            ));
        }

        out.truncate(out.len() - pad);
        Ok(())
    }
}

impl CipherCore for CbcDecryptor<'_> {
    fn direction(&self) -> Direction {
        Direction::Decrypt
    }

    fn update(&mut self, input: &[u8], out: &mut Vec<u8>) {
        self.chain.pending.expose_secret_mut().extend_from_slice(input);
        let len = self.chain.pending.expose_secret().len();
        let block_size = self.chain.block_size;
        let keep = match len % block_size {
            0 if len > 0 => block_size,
            rem => rem,
        };
        self.chain.drain(keep, Direction::Decrypt, out);
    }

    // On cancellation the held-back block is a middle block, not the padded
    // last one: release it as-is and drop any partial block.
    fn finish(mut self, out: &mut Vec<u8>, cancelled: bool) -> Result<(), MagicCryptError> {
        if !cancelled {
            return self.finish_unpadded(out);
        }
        let len = self.chain.pending.expose_secret().len();
        let partial = len % self.chain.block_size;
        self.chain.pending.expose_secret_mut().truncate(len - partial);
        self.chain.drain(0, Direction::Decrypt, out);
        Ok(())
    }
}
