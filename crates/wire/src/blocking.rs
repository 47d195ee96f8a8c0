//! Blocking, fully-buffered reads from local resources.
//!
//! These calls block the current thread until the whole result is available.
//! Dispatch them off any latency-sensitive thread, e.g. with
//! `tokio::task::spawn_blocking`. There is no timeout at this level.
//!
//! Every function takes the source by value and drops it before returning, on
//! success and on failure alike. Errors raised while closing are not reported.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use bytes::{Bytes, BytesMut};
use tracing::{debug, warn};

use crate::protocol::ReadError;

/// Size of each read performed by [`read_to_end`].
pub const READ_CHUNK_SIZE: usize = 4 * 1024;

/// Initial capacity of the buffer accumulated by [`read_to_end`].
const INIT_READ_CAPACITY: usize = 1024;

/// Reads exactly `length` bytes from `source`.
///
/// # Errors
///
/// Returns [`ReadError::ShortRead`] if `source` ends before `length` bytes were
/// read, or [`ReadError::Io`] if a read fails. No partial data is returned.
pub fn read_exactly<R: Read>(mut source: R, length: usize) -> Result<Bytes, ReadError> {
    let mut bytes = vec![0u8; length];
    let mut offset = 0;

    while offset < length {
        match source.read(&mut bytes[offset..]) {
            Ok(0) => {
                warn!(expected = length, actual = offset, "source exhausted before read completed");
                return Err(ReadError::short_read(length, offset));
            }
            Ok(n) => offset += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ReadError::io(e)),
        }
    }

    debug!(length, "read exact bytes");
    Ok(Bytes::from(bytes))
}

/// Opens the file at `path` and reads exactly `length` bytes from its start.
///
/// # Errors
///
/// See [`read_exactly`]. Failing to open the file is reported as [`ReadError::Io`].
pub fn read_file<P: AsRef<Path>>(path: P, length: usize) -> Result<Bytes, ReadError> {
    let file = File::open(path)?;
    read_exactly(file, length)
}

/// Reads `source` until it is exhausted and returns everything read.
///
/// # Errors
///
/// Returns [`ReadError::Io`] if a read fails. Data read before the failure is
/// discarded.
pub fn read_to_end<R: Read>(mut source: R) -> Result<BytesMut, ReadError> {
    let mut bytes = BytesMut::with_capacity(INIT_READ_CAPACITY);
    let mut buffer = [0u8; READ_CHUNK_SIZE];

    loop {
        match source.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => bytes.extend_from_slice(&buffer[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ReadError::io(e)),
        }
    }

    debug!(length = bytes.len(), "read source to end");
    Ok(bytes)
}
