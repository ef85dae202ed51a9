//! src/checksum/crc32.rs
//! CRC-32 (ISO 3309 / zip / gzip), widened to 8 bytes.

/// Reflected CRC-32 polynomial (bit-reversed 0x04C11DB7).
pub const CRC32_POLY: u32 = 0xEDB8_8320;

const fn make_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0u32;
    while i < 256 {
        let mut crc = i;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ CRC32_POLY;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i as usize] = crc;
        i += 1;
    }
    table
}

static TABLE: [u32; 256] = make_table();

/// Incremental CRC-32 state.
#[derive(Debug, Clone)]
pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self { state: 0xFFFF_FFFF }
    }
}

impl Crc32 {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: &[u8]) {
        for &b in data {
            let idx = ((self.state ^ b as u32) & 0xFF) as usize;
            self.state = (self.state >> 8) ^ TABLE[idx];
        }
    }

    /// The raw 32-bit checksum.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.state ^ 0xFFFF_FFFF
    }

    /// The checksum as 8 big-endian bytes: four zero bytes, then the CRC.
    #[must_use]
    pub fn finalize(&self) -> [u8; 8] {
        u64::from(self.value()).to_be_bytes()
    }
}

/// CRC-32 of `data` in the widened 8-byte layout.
#[inline]
#[must_use]
pub fn crc32(data: &[u8]) -> [u8; 8] {
    let mut crc = Crc32::new();
    crc.update(data);
    crc.finalize()
}
