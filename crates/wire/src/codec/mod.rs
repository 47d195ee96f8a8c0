//! HTTP/1.1 wire encoding and token decoding.
//!
//! # Architecture
//!
//! - Head encoding via the [`header`] module:
//!   - Response heads built from a precomputed status line
//!   - Request heads built from a method and an origin-form target
//!   - One line per header value, multi-valued headers repeated
//!
//! - Chunked transfer helpers via the [`body`] module:
//!   - [`parse_chunk_size`]: size token parsing with extension stripping
//!   - [`ChunkSizeDecoder`]: a [`tokio_util::codec::Decoder`] for chunk-size lines
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use micro_wire::codec::{encode_response_head, parse_chunk_size};
//! use micro_wire::protocol::HeaderValue;
//!
//! let mut headers = BTreeMap::new();
//! headers.insert("Content-Length", HeaderValue::from("5"));
//! headers.insert("Set-Cookie", HeaderValue::from(vec!["a=1", "b=2"]));
//!
//! let head = encode_response_head(200, &headers).unwrap();
//! assert!(head.ends_with(b"\r\n\r\n"));
//!
//! assert_eq!(parse_chunk_size("1a;ext=1\r\n").unwrap(), 26);
//! ```

pub mod body;
pub mod header;

pub use body::{parse_chunk_size, ChunkSizeDecoder};
pub use header::{
    bad_request, encode_get_request, encode_request_head, encode_response_head, write_request_head,
    write_response_head, BAD_REQUEST,
};
