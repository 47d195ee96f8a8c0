//! Precomputed HTTP/1.1 status lines.
//!
//! Every status code in `100..=599` that has a canonical reason phrase gets a
//! ready-to-copy `HTTP/1.1 <code> <reason>\r\n` line. The table is built on
//! first use and never mutated afterwards.

use std::collections::HashMap;

use http::StatusCode;
use once_cell::sync::Lazy;

use crate::protocol::SendError;

static STATUS_LINES: Lazy<HashMap<u16, Box<[u8]>>> = Lazy::new(|| {
    (100..=599u16)
        .filter_map(|code| {
            let status = StatusCode::from_u16(code).ok()?;
            let reason = status.canonical_reason()?;
            let line = format!("HTTP/1.1 {} {}\r\n", status.as_str(), reason);
            Some((code, line.into_bytes().into_boxed_slice()))
        })
        .collect()
});

/// Returns the status line for `code`, CRLF included.
///
/// # Errors
///
/// Returns [`SendError::UnknownStatus`] if the code has no known reason phrase.
pub fn status_line(code: u16) -> Result<&'static [u8], SendError> {
    STATUS_LINES.get(&code).map(AsRef::as_ref).ok_or_else(|| SendError::unknown_status(code))
}
