use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::body::parse_chunk_size;
use crate::ensure;
use crate::protocol::ParseError;

/// Longest chunk-size line accepted, terminator included.
pub const MAX_LINE: usize = 2048;

/// Decodes one chunk-size line at a time from a byte stream.
///
/// The decoder waits until a full LF-terminated line is buffered, consumes it
/// and yields the parsed size. Chunk data and trailers are left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSizeDecoder {
    max_line: usize,
}

impl ChunkSizeDecoder {
    pub fn new() -> Self {
        Self::with_max_line(MAX_LINE)
    }

    /// Creates a decoder accepting lines of at most `max_line` bytes,
    /// terminator included. A limit below 1 is raised to 1.
    pub fn with_max_line(max_line: usize) -> Self {
        Self { max_line: max_line.max(1) }
    }

    pub fn max_line(&self) -> usize {
        self.max_line
    }
}

impl Default for ChunkSizeDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for ChunkSizeDecoder {
    type Item = u64;
    type Error = ParseError;

    /// Decodes the next chunk size from `src`.
    ///
    /// # Returns
    /// - `Ok(Some(size))` when a full line was consumed
    /// - `Ok(None)` when more data is needed
    /// - `Err(ParseError)` if the line is too long or not a valid chunk size
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let scan_len = src.len().min(self.max_line);

        let Some(lf_index) = src[..scan_len].iter().position(|&b| b == b'\n') else {
            ensure!(src.len() < self.max_line, ParseError::too_large_line(src.len(), self.max_line));
            // need more data
            return Ok(None);
        };

        let line = src.split_to(lf_index + 1);
        let text = std::str::from_utf8(&line).map_err(ParseError::malformed_chunk_size)?;
        let size = parse_chunk_size(text)?;

        trace!(size, line_len = line.len(), "decoded chunk size");
        Ok(Some(size))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(buf)? {
            Some(size) => Ok(Some(size)),
            None if buf.is_empty() => Ok(None),
            None => {
                buf.clear();
                Err(ParseError::malformed_chunk_size("unterminated chunk size line"))
            }
        }
    }
}
