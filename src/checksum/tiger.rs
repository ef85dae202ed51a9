//! src/checksum/tiger.rs
//! Tiger/192 hash (three passes), Anderson & Biham 1996.
//!
//! The digest is the three chaining words, each little-endian, i.e. the
//! byte order usually labelled `tiger192,3`.

use super::tiger_sboxes::SBOXES;
use crate::consts::TIGER_DIGEST_LENGTH;

const BLOCK_SIZE: usize = 64;

const INITIAL_STATE: [u64; 3] = [
    0x0123_4567_89AB_CDEF,
    0xFEDC_BA98_7654_3210,
    0xF096_A5B4_C3B2_E187,
];

#[inline(always)]
fn round(a: &mut u64, b: &mut u64, c: &mut u64, x: u64, mul: u64) {
    let [t1, t2, t3, t4] = &SBOXES;
    *c ^= x;
    let cb = c.to_le_bytes();
    *a = a.wrapping_sub(
        t1[cb[0] as usize] ^ t2[cb[2] as usize] ^ t3[cb[4] as usize] ^ t4[cb[6] as usize],
    );
    *b = b.wrapping_add(
        t4[cb[1] as usize] ^ t3[cb[3] as usize] ^ t2[cb[5] as usize] ^ t1[cb[7] as usize],
    );
    *b = b.wrapping_mul(mul);
}

fn pass(a: &mut u64, b: &mut u64, c: &mut u64, x: &[u64; 8], mul: u64) {
    round(a, b, c, x[0], mul);
    round(b, c, a, x[1], mul);
    round(c, a, b, x[2], mul);
    round(a, b, c, x[3], mul);
    round(b, c, a, x[4], mul);
    round(c, a, b, x[5], mul);
    round(a, b, c, x[6], mul);
    round(b, c, a, x[7], mul);
}

fn key_schedule(x: &mut [u64; 8]) {
    x[0] = x[0].wrapping_sub(x[7] ^ 0xA5A5_A5A5_A5A5_A5A5);
    x[1] ^= x[0];
    x[2] = x[2].wrapping_add(x[1]);
    x[3] = x[3].wrapping_sub(x[2] ^ ((!x[1]) << 19));
    x[4] ^= x[3];
    x[5] = x[5].wrapping_add(x[4]);
    x[6] = x[6].wrapping_sub(x[5] ^ ((!x[4]) >> 23));
    x[7] ^= x[6];
    x[0] = x[0].wrapping_add(x[7]);
    x[1] = x[1].wrapping_sub(x[0] ^ ((!x[7]) << 19));
    x[2] ^= x[1];
    x[3] = x[3].wrapping_add(x[2]);
    x[4] = x[4].wrapping_sub(x[3] ^ ((!x[2]) >> 23));
    x[5] ^= x[4];
    x[6] = x[6].wrapping_add(x[5]);
    x[7] = x[7].wrapping_sub(x[6] ^ 0x0123_4567_89AB_CDEF);
}

fn compress(state: &mut [u64; 3], block: &[u8; BLOCK_SIZE]) {
    let mut x = [0u64; 8];
    for (word, bytes) in x.iter_mut().zip(block.chunks_exact(8)) {
        let mut le = [0u8; 8];
        le.copy_from_slice(bytes);
        *word = u64::from_le_bytes(le);
    }

    let [mut a, mut b, mut c] = *state;

    pass(&mut a, &mut b, &mut c, &x, 5);
    key_schedule(&mut x);
    pass(&mut c, &mut a, &mut b, &x, 7);
    key_schedule(&mut x);
    pass(&mut b, &mut c, &mut a, &x, 9);

    // feedforward
    state[0] ^= a;
    state[1] = b.wrapping_sub(state[1]);
    state[2] = c.wrapping_add(state[2]);
}

/// Incremental Tiger/192 hasher.
#[derive(Clone)]
pub struct Tiger {
    state: [u64; 3],
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
    length: u64,
}

impl Default for Tiger {
    fn default() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_SIZE],
            buffered: 0,
            length: 0,
        }
    }
}

impl std::fmt::Debug for Tiger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tiger").field("length", &self.length).finish_non_exhaustive()
    }
}

impl Tiger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, mut data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);

        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered < BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            compress(&mut self.state, &block);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for chunk in &mut blocks {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            compress(&mut self.state, &block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Pads the message and returns the 24-byte digest. The hasher is left
    /// untouched and can keep absorbing input.
    #[must_use]
    pub fn finalize(&self) -> [u8; TIGER_DIGEST_LENGTH] {
        let mut state = self.state;
        let bit_length = self.length.wrapping_mul(8);

        let mut block = [0u8; BLOCK_SIZE];
        block[..self.buffered].copy_from_slice(&self.buffer[..self.buffered]);
        block[self.buffered] = 0x01;

        if self.buffered + 1 > BLOCK_SIZE - 8 {
            compress(&mut state, &block);
            block = [0u8; BLOCK_SIZE];
        }
        block[BLOCK_SIZE - 8..].copy_from_slice(&bit_length.to_le_bytes());
        compress(&mut state, &block);

        let mut digest = [0u8; TIGER_DIGEST_LENGTH];
        for (out, word) in digest.chunks_exact_mut(8).zip(state.iter()) {
            out.copy_from_slice(&word.to_le_bytes());
        }
        digest
    }
}

/// Tiger/192 digest of `data`.
#[inline]
#[must_use]
pub fn tiger(data: &[u8]) -> [u8; TIGER_DIGEST_LENGTH] {
    let mut hasher = Tiger::new();
    hasher.update(data);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sbox_first_entries() {
        assert_eq!(SBOXES[0][0], 0x02AA_B17C_F7E9_0C5E);
        assert_eq!(SBOXES[0][1], 0xAC42_4B03_E243_A8EC);
        assert_eq!(SBOXES[0][2], 0x72CD_5BE3_0DD5_FCD3);
    }

    #[test]
    fn padding_spills_into_second_block() {
        // 56..=63 buffered bytes leave no room for the length word.
        for len in 55..=64 {
            let data = vec![0x61u8; len];
            let mut split = Tiger::new();
            split.update(&data[..len / 2]);
            split.update(&data[len / 2..]);
            assert_eq!(split.finalize(), tiger(&data), "len {len}");
        }
    }
}
