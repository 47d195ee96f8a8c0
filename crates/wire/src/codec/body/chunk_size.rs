//! Chunk-size token parsing for chunked transfer encoding.
//!
//! A chunk-size line is the hexadecimal length of the next chunk, optionally
//! followed by `;`-delimited extensions, as described in
//! [RFC 9112 Section 7.1](https://www.rfc-editor.org/rfc/rfc9112#section-7.1).

use crate::ensure;
use crate::protocol::ParseError;
use crate::scan::{end_of_content, first_non_whitespace};

/// Parses the size of a chunk from its size line.
///
/// Surrounding whitespace is trimmed first, then the token is cut at the first
/// `;`, whitespace or control character, which drops extensions and any line
/// terminator. What remains is read as case-insensitive hexadecimal. A size of
/// `0` marks the last chunk.
///
/// # Errors
///
/// Returns [`ParseError::MalformedChunkSize`] if the token is empty, contains a
/// non-hex digit, or does not fit in a `u64`.
pub fn parse_chunk_size(line: &str) -> Result<u64, ParseError> {
    let start = first_non_whitespace(line, 0);
    let end = end_of_content(line).max(start);
    let trimmed = &line[start..end];

    let token = match trimmed.find(|c: char| c == ';' || c.is_whitespace() || c.is_control()) {
        Some(i) => &trimmed[..i],
        None => trimmed,
    };

    ensure!(!token.is_empty(), ParseError::malformed_chunk_size("empty chunk size"));
    ensure!(
        token.bytes().all(|b| b.is_ascii_hexdigit()),
        ParseError::malformed_chunk_size(format!("invalid hex digit in {token:?}"))
    );

    u64::from_str_radix(token, 16).map_err(|e| ParseError::malformed_chunk_size(format!("{token:?}: {e}")))
}
