use std::collections::BTreeMap;

use bytes::{BufMut, Bytes};
use once_cell::sync::Lazy;

use crate::codec::header::encode_response_head;
use crate::protocol::header::CONTENT_LENGTH;
use crate::protocol::HeaderValue;

const BAD_REQUEST_BODY: &[u8] = b"bad request";

/// A complete `400 Bad Request` response: status line, `Content-Length` and
/// the body `bad request`.
///
/// Built once on first access from a sorted header map, so its bytes never change.
pub static BAD_REQUEST: Lazy<Bytes> = Lazy::new(|| {
    let mut headers = BTreeMap::new();
    headers.insert(CONTENT_LENGTH, HeaderValue::from(BAD_REQUEST_BODY.len().to_string()));

    let mut response = encode_response_head(400, &headers).expect("400 always has a status line");
    response.put_slice(BAD_REQUEST_BODY);
    response.freeze()
});

/// Returns the canned `400 Bad Request` response.
#[inline]
pub fn bad_request() -> Bytes {
    BAD_REQUEST.clone()
}
