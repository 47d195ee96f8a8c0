//! Byte-level HTTP/1.1 encoding and token scanning
//!
//! This crate is the layer of an HTTP/1.1 client or server that turns message
//! heads into exact wire bytes and reads back the small textual tokens a line
//! parser runs into. It owns no sockets and no connection state; every
//! encoding and scanning function is pure and can be called from any thread.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use http::{Method, Uri};
//! use micro_wire::codec::encode_request_head;
//! use micro_wire::protocol::header::{HOST, USER_AGENT};
//! use micro_wire::protocol::uri::canonical_path;
//! use micro_wire::protocol::HeaderValue;
//!
//! let uri: Uri = "http://example.com/search?q=rust".parse().unwrap();
//!
//! let mut headers = BTreeMap::new();
//! headers.insert(HOST, HeaderValue::from("example.com"));
//! headers.insert(USER_AGENT, HeaderValue::from("micro-wire"));
//!
//! let head = encode_request_head(&Method::GET, &canonical_path(&uri), &headers);
//! assert_eq!(
//!     &head[..],
//!     &b"GET /search?q=rust HTTP/1.1\r\nHost: example.com\r\nUser-Agent: micro-wire\r\n\r\n"[..]
//! );
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: head encoding, the canned `400` response and chunk-size decoding
//! - [`protocol`]: header values, status lines, uri helpers and error types
//! - [`scan`]: whitespace boundary scanning used to split protocol lines
//! - [`blocking`]: fully-buffered blocking reads from files and streams
//!
//! # Error Handling
//!
//! Each concern has its own error type, all convertible into
//! [`protocol::WireError`]:
//!
//! - [`protocol::SendError`]: unknown status codes
//! - [`protocol::ParseError`]: malformed chunk sizes, oversized lines
//! - [`protocol::ConnectError`]: hosts that cannot be resolved
//! - [`protocol::ReadError`]: short reads and I/O failures
//!
//! # Limitations
//!
//! - Header values are written verbatim, callers must not pass CR or LF in them
//! - The encoder does not reconcile `Content-Length` with `Transfer-Encoding`
//! - Chunk-size lines are limited to [`codec::body::MAX_LINE`] bytes by the decoder

pub mod blocking;
pub mod codec;
pub mod protocol;
pub mod scan;

mod utils;
pub(crate) use utils::ensure;
