//! Chunked transfer encoding helpers.
//!
//! - [`parse_chunk_size`]: parses a single chunk-size line
//! - [`ChunkSizeDecoder`]: pulls chunk-size lines out of a byte stream, with a line length limit

mod chunk_size;
mod chunk_size_decoder;

pub use chunk_size::parse_chunk_size;
pub use chunk_size_decoder::{ChunkSizeDecoder, MAX_LINE};
