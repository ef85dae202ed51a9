//! tests/common.rs
//! Common constants and utilities shared across test files

use magiccrypt_rs::{CancelAfter, CryptListener, Progress};
use serde::de::DeserializeOwned;
use std::ops::ControlFlow;

/// Standard test passphrase used across test vectors
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "magickey";

/// Plaintext of the published MagicCrypt examples
#[allow(dead_code)] // Used across multiple test files
pub const TEST_TEXT: &str = "http://magiclen.org";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_DATA: &[u8] = b"test data";

/// Every supported strength, in bits
#[allow(dead_code)] // Used across multiple test files
pub const TEST_BITS: &[u16] = &[64, 128, 192, 256];

/// Deterministic pseudo-random bytes (xorshift), so large inputs need no RNG crate
#[allow(dead_code)] // Used across multiple test files
pub fn pattern_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

/// Load a JSON vector file from tests/test_data/
#[allow(dead_code)] // Used across multiple test files
pub fn load_json_vectors<T: DeserializeOwned>(filename: &str) -> Vec<T> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_data")
        .join(filename);

    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {filename}: {e}"));

    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {filename}: {e}"))
}

/// Listener that records every event, optionally cancelling after N chunks
#[allow(dead_code)] // Used across multiple test files
#[derive(Debug, Default)]
pub struct ProgressLog {
    events: Vec<Progress>,
    stop: Option<CancelAfter>,
}

#[allow(dead_code)] // Used across multiple test files
impl ProgressLog {
    /// Records everything, never cancels
    pub fn new() -> Self {
        Self::default()
    }

    /// Records everything, cancels on the `chunks`-th `Running` event
    pub fn cancelling_after(chunks: u64) -> Self {
        Self {
            events: Vec::new(),
            stop: Some(CancelAfter::new(chunks)),
        }
    }

    pub fn events(&self) -> &[Progress] {
        &self.events
    }
}

impl CryptListener for ProgressLog {
    fn on_progress(&mut self, progress: Progress) -> ControlFlow<()> {
        self.events.push(progress);
        match self.stop.as_mut() {
            Some(stop) => stop.on_progress(progress),
            None => ControlFlow::Continue(()),
        }
    }
}
