//! tests/utils_tests.rs
//! Unit tests for utility functions

use magiccrypt_rs::utils::{at_eof, read_chunk, xor_in_place};
use std::io::{self, Cursor, Read};

#[test]
fn xor_in_place_basic() {
    let mut block = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
    let other = [0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7];

    xor_in_place(&mut block, &other);

    assert_eq!(block, [0xF0; 8]);
}

#[test]
fn xor_in_place_aes_block() {
    let mut block = [0xAAu8; 16];
    xor_in_place(&mut block, &[0x55u8; 16]);
    assert_eq!(block, [0xFFu8; 16]);
}

#[test]
fn xor_in_place_reversible() {
    let original = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];
    let key = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, 0x00, 0x11];

    let mut block = original;
    xor_in_place(&mut block, &key);
    assert_ne!(block, original);
    xor_in_place(&mut block, &key);
    assert_eq!(block, original);
}

#[test]
fn xor_in_place_ignores_longer_other() {
    let mut block = [0x0Fu8; 4];
    xor_in_place(&mut block, &[0xF0u8; 16]);
    assert_eq!(block, [0xFFu8; 4]);
}

// —————————————————————————————————————————————————————————————————————————————
// read_chunk
// —————————————————————————————————————————————————————————————————————————————

/// Hands out at most `step` bytes per read, and fails once with `Interrupted`.
struct Trickle {
    data: Vec<u8>,
    pos: usize,
    step: usize,
    interrupted: bool,
}

impl Read for Trickle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "try again"));
        }
        let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[test]
fn read_chunk_fills_buffer_from_short_reads() {
    let data: Vec<u8> = (0..100u8).collect();
    let mut reader = Trickle {
        data: data.clone(),
        pos: 0,
        step: 7,
        interrupted: false,
    };

    let mut buf = [0u8; 64];
    assert_eq!(read_chunk(&mut reader, &mut buf).unwrap(), 64);
    assert_eq!(&buf[..], &data[..64]);

    assert_eq!(read_chunk(&mut reader, &mut buf).unwrap(), 36);
    assert_eq!(&buf[..36], &data[64..]);

    assert_eq!(read_chunk(&mut reader, &mut buf).unwrap(), 0);
}

#[test]
fn read_chunk_empty_source() {
    let mut buf = [0u8; 16];
    assert_eq!(read_chunk(&mut Cursor::new(Vec::new()), &mut buf).unwrap(), 0);
}

#[test]
fn read_chunk_propagates_errors() {
    struct Broken;
    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    let mut buf = [0u8; 16];
    let err = read_chunk(&mut Broken, &mut buf).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

// —————————————————————————————————————————————————————————————————————————————
// at_eof
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn at_eof_on_exhausted_reader() {
    let mut reader = Cursor::new(vec![1u8, 2]);
    reader.set_position(2);
    assert!(at_eof(&mut reader).unwrap());
    assert!(at_eof(&mut io::empty()).unwrap());
}

#[test]
fn at_eof_consumes_one_byte_when_data_remains() {
    let mut reader = Cursor::new(vec![1u8, 2, 3]);
    assert!(!at_eof(&mut reader).unwrap());
    assert_eq!(reader.position(), 1);

    let mut rest = Vec::new();
    reader.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, [2, 3]);
}

#[test]
fn at_eof_retries_interrupted() {
    let mut reader = Trickle {
        data: Vec::new(),
        pos: 0,
        step: 1,
        interrupted: false,
    };
    assert!(at_eof(&mut reader).unwrap());
}
