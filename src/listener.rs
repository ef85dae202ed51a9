//! # Progress Listener
//!
//! Every stream operation reports to an optional listener in three phases:
//!
//! ```text
//! Started { total }  →  Running { processed, total }*  →  Finished { processed, total }
//! ```
//!
//! `Running` is sent once per chunk. Returning [`ControlFlow::Break`] from it
//! stops the operation at that chunk boundary; the cipher is still finalized
//! and `Finished` is still sent. The return value for `Started` and
//! `Finished` is ignored.
//!
//! Any `FnMut(Progress) -> ControlFlow<()>` closure is a listener.

use std::ops::ControlFlow;

/// One progress event. `total` is `None` when the size is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Sent once, before the first read.
    Started { total: Option<u64> },
    /// Sent after each chunk has been written; may stop the stream.
    Running { processed: u64, total: Option<u64> },
    /// Sent once, after the cipher is finalized and the destination flushed.
    Finished { processed: u64, total: Option<u64> },
}

impl Progress {
    /// Bytes consumed from the source so far (0 for `Started`).
    #[must_use]
    pub const fn processed(&self) -> u64 {
        match self {
            Progress::Started { .. } => 0,
            Progress::Running { processed, .. } | Progress::Finished { processed, .. } => {
                *processed
            }
        }
    }

    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        match self {
            Progress::Started { total }
            | Progress::Running { total, .. }
            | Progress::Finished { total, .. } => *total,
        }
    }
}

/// Receives [`Progress`] events and decides whether a stream keeps going.
pub trait CryptListener {
    /// Handle one event. Only the answer to `Running` is acted on.
    fn on_progress(&mut self, progress: Progress) -> ControlFlow<()>;
}

impl<F> CryptListener for F
where
    F: FnMut(Progress) -> ControlFlow<()>,
{
    #[inline]
    fn on_progress(&mut self, progress: Progress) -> ControlFlow<()> {
        self(progress)
    }
}

/// Stops after a fixed number of `Running` events.
///
/// Bounds how much of a stream gets processed: `CancelAfter::new(n)` lets
/// `n` chunks through, then cancels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelAfter {
    chunks: u64,
    seen: u64,
}

impl CancelAfter {
    #[must_use]
    pub const fn new(chunks: u64) -> Self {
        Self { chunks, seen: 0 }
    }

    /// `Running` events received so far.
    #[must_use]
    pub const fn seen(&self) -> u64 {
        self.seen
    }
}

impl CryptListener for CancelAfter {
    fn on_progress(&mut self, progress: Progress) -> ControlFlow<()> {
        if let Progress::Running { .. } = progress {
            self.seen += 1;
            if self.seen >= self.chunks {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
}
