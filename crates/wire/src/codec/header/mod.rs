//! HTTP head encoding.
//!
//! - [`encode_response_head`] / [`write_response_head`]: status line plus headers
//! - [`encode_request_head`] / [`write_request_head`]: request line plus headers
//! - [`encode_get_request`]: shortcut for `GET` requests
//! - [`BAD_REQUEST`]: a canned `400` response shared by every caller

mod bad_request;
mod header_encoder;

pub use bad_request::{bad_request, BAD_REQUEST};
pub use header_encoder::{
    encode_get_request, encode_request_head, encode_response_head, write_request_head, write_response_head,
};
