//! src/crypt/stream.rs
//! The chunk loop shared by every stream encryption and decryption.

use crate::aliases::ChunkBuffer;
use crate::crypt::cbc::CipherCore;
use crate::error::MagicCryptError;
use crate::listener::{CryptListener, Progress};
use crate::utils::{at_eof, read_chunk};
use std::io::{Read, Write};
use tracing::{debug, trace};

/// Push `source` through `core` into `destination`, `buffer_size` bytes at a time.
///
/// Returns the number of bytes consumed from `source` (not written: padding
/// changes the output length). I/O errors abort immediately; whatever was
/// already written stays in `destination`.
///
/// When the listener stops the loop on a full chunk, one more byte is read
/// to tell a real cancellation from a stop at the end of input. A stop at
/// the end of input finishes normally, so decryption still strips the
/// padding. If that byte exists it is discarded and not counted.
pub(crate) fn crypt_stream<C, R, W>(
    mut core: C,
    source: &mut R,
    destination: &mut W,
    total: Option<u64>,
    buffer_size: usize,
    mut listener: Option<&mut dyn CryptListener>,
) -> Result<u64, MagicCryptError>
where
    C: CipherCore,
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let direction = core.direction();
    debug!(%direction, ?total, buffer_size, "stream started");
    if let Some(l) = listener.as_deref_mut() {
        let _ = l.on_progress(Progress::Started { total });
    }

    let mut chunk = ChunkBuffer::new(vec![0u8; buffer_size]);
    let mut output = ChunkBuffer::new(Vec::with_capacity(buffer_size + 16));
    let mut processed: u64 = 0;
    let mut cancelled = false;

    loop {
        let n = read_chunk(source, chunk.expose_secret_mut())?;
        if n == 0 {
            break;
        }
        processed += n as u64;

        let out = output.expose_secret_mut();
        out.clear();
        core.update(&chunk.expose_secret()[..n], out);
        destination.write_all(out)?;
        trace!(%direction, processed, "chunk processed");

        // Once past the announced size, the announced size was wrong.
        let reported = total.filter(|t| processed <= *t);
        if let Some(l) = listener.as_deref_mut() {
            if l.on_progress(Progress::Running { processed, total: reported }).is_break() {
                // A stop on the final chunk is an ordinary finish.
                cancelled = n == buffer_size && !at_eof(source)?;
                break;
            }
        }

        if n < buffer_size {
            break;
        }
    }

    let out = output.expose_secret_mut();
    out.clear();
    core.finish(out, cancelled)?;
    destination.write_all(out)?;
    destination.flush()?;

    if cancelled {
        debug!(%direction, processed, ?total, "stream cancelled");
    } else {
        debug!(%direction, processed, "stream completed");
    }

    if let Some(l) = listener.as_deref_mut() {
        let _ = l.on_progress(Progress::Finished { processed, total });
    }

    Ok(processed)
}
