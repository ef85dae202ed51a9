//! src/checksum/crc64.rs
//! Two CRC-64 definitions over the ECMA-182 polynomial.
//!
//! They are **not** interchangeable:
//!
//! | type        | bit order | polynomial           | init | xorout |
//! |-------------|-----------|----------------------|------|--------|
//! | [`Crc64Msb`] | MSB first | `0x42F0E1EBA9EA3693` | `!0` | `!0`   |
//! | [`Crc64Lsb`] | LSB first | `0xC96C5795D7870F42` | `0`  | `0`    |
//!
//! `Crc64Msb` has the CRC-64/WE parameters. `Crc64Lsb` is the reflected
//! polynomial with a zero register and no final inversion; it is the variant
//! the 64-bit key derivation uses.

/// ECMA-182 polynomial, normal form.
pub const CRC64_MSB_POLY: u64 = 0x42F0_E1EB_A9EA_3693;

/// ECMA-182 polynomial, bit-reversed.
pub const CRC64_LSB_POLY: u64 = 0xC96C_5795_D787_0F42;

// Byte value starts in the low bits and is shifted through all 64 positions.
const fn make_msb_table() -> [u64; 256] {
    let mut table = [0u64; 256];
    let mut i = 0u64;
    while i < 256 {
        let mut v = i;
        let mut j = 0;
        while j < 64 {
            if v & (1 << 63) == 0 {
                v <<= 1;
            } else {
                v = (v << 1) ^ CRC64_MSB_POLY;
            }
            j += 1;
        }
        table[i as usize] = v;
        i += 1;
    }
    table
}

const fn make_lsb_table() -> [u64; 256] {
    let mut table = [0u64; 256];
    let mut i = 0u64;
    while i < 256 {
        let mut v = i;
        let mut j = 0;
        while j < 8 {
            if v & 1 == 1 {
                v = (v >> 1) ^ CRC64_LSB_POLY;
            } else {
                v >>= 1;
            }
            j += 1;
        }
        table[i as usize] = v;
        i += 1;
    }
    table
}

static MSB_TABLE: [u64; 256] = make_msb_table();
static LSB_TABLE: [u64; 256] = make_lsb_table();

/// Incremental MSB-first CRC-64 (variant A).
#[derive(Debug, Clone)]
pub struct Crc64Msb {
    sum: u64,
}

impl Default for Crc64Msb {
    fn default() -> Self {
        Self { sum: !0 }
    }
}

impl Crc64Msb {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: &[u8]) {
        for &b in data {
            let idx = (((self.sum >> 56) ^ u64::from(b)) & 0xFF) as usize;
            self.sum = (self.sum << 8) ^ MSB_TABLE[idx];
        }
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.sum ^ !0
    }

    #[must_use]
    pub fn finalize(&self) -> [u8; 8] {
        self.value().to_be_bytes()
    }
}

/// Incremental LSB-first CRC-64 (variant B).
#[derive(Debug, Clone, Default)]
pub struct Crc64Lsb {
    sum: u64,
}

impl Crc64Lsb {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: &[u8]) {
        for &b in data {
            let idx = ((self.sum ^ u64::from(b)) & 0xFF) as usize;
            self.sum = (self.sum >> 8) ^ LSB_TABLE[idx];
        }
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.sum
    }

    #[must_use]
    pub fn finalize(&self) -> [u8; 8] {
        self.sum.to_be_bytes()
    }
}

/// MSB-first CRC-64 of `data`, big-endian.
#[inline]
#[must_use]
pub fn crc64_msb(data: &[u8]) -> [u8; 8] {
    let mut crc = Crc64Msb::new();
    crc.update(data);
    crc.finalize()
}

/// LSB-first CRC-64 of `data`, big-endian.
#[inline]
#[must_use]
pub fn crc64_lsb(data: &[u8]) -> [u8; 8] {
    let mut crc = Crc64Lsb::new();
    crc.update(data);
    crc.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msb_table_entries() {
        assert_eq!(MSB_TABLE[0], 0);
        assert_eq!(MSB_TABLE[1], CRC64_MSB_POLY);
        assert_eq!(MSB_TABLE[255], 0x9AFC_E626_CE85_B507);
    }

    #[test]
    fn lsb_table_entries() {
        assert_eq!(LSB_TABLE[0], 0);
        assert_eq!(LSB_TABLE[1], 0xB32E_4CBE_03A7_5F6F);
        assert_eq!(LSB_TABLE[128], CRC64_LSB_POLY);
        assert_eq!(LSB_TABLE[255], 0xE0AD_A173_6467_3F59);
    }

    #[test]
    fn msb_check_value_is_crc64_we() {
        assert_eq!(crc64_msb(b"123456789"), 0x62EC_59E3_F1A4_F00Au64.to_be_bytes());
    }

    #[test]
    fn lsb_check_value() {
        assert_eq!(crc64_lsb(b"123456789"), 0x2B9C_7EE4_E278_0C8Au64.to_be_bytes());
    }

    #[test]
    fn empty_input() {
        assert_eq!(crc64_msb(b""), [0u8; 8]);
        assert_eq!(crc64_lsb(b""), [0u8; 8]);
    }
}
