//! HTTP/1.1 message head serialization.
//!
//! A head is the status line (or request line), one `Key: Value\r\n` line per
//! header value and a terminating empty line. Multi-valued headers are written
//! as repeated lines with the same key, never folded into one.
//!
//! Header keys and values are copied verbatim. The caller is responsible for
//! values free of CR and LF; nothing is escaped or validated here. Lines are
//! written in the iteration order of the supplied headers, so a sorted or
//! insertion-ordered map gives reproducible bytes.

use bytes::{BufMut, Bytes, BytesMut};
use http::Method;
use tracing::{error, trace};

use crate::protocol::{status_line, HeaderValue, SendError};

/// Initial buffer size allocated for a response head.
const INIT_RESPONSE_HEAD_SIZE: usize = 196;

/// Base buffer size for a request head, grown by [`REQUEST_HEAD_SIZE_PER_HEADER`] per header.
const INIT_REQUEST_HEAD_SIZE: usize = 64;
const REQUEST_HEAD_SIZE_PER_HEADER: usize = 48;

const HTTP_11: &[u8] = b"HTTP/1.1";

/// Encodes a response head for `status` into a fresh buffer.
///
/// # Errors
///
/// Returns [`SendError::UnknownStatus`] if `status` has no known status line.
pub fn encode_response_head<'a, K, I>(status: u16, headers: I) -> Result<BytesMut, SendError>
where
    K: AsRef<str> + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a HeaderValue)>,
{
    let mut dst = BytesMut::with_capacity(INIT_RESPONSE_HEAD_SIZE);
    write_response_head(&mut dst, status, headers)?;
    Ok(dst)
}

/// Appends a response head for `status` to `dst`.
///
/// Nothing is written when the status is unknown.
///
/// # Errors
///
/// Returns [`SendError::UnknownStatus`] if `status` has no known status line.
pub fn write_response_head<'a, K, I>(dst: &mut BytesMut, status: u16, headers: I) -> Result<(), SendError>
where
    K: AsRef<str> + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a HeaderValue)>,
{
    let line = status_line(status).inspect_err(|_| error!(status, "unknown http status"))?;

    dst.put_slice(line);
    write_headers(dst, headers);
    Ok(())
}

/// Encodes a request head, `METHOD SP PATH SP HTTP/1.1`, into a fresh buffer.
pub fn encode_request_head<'a, K, I>(method: &Method, path: &str, headers: I) -> BytesMut
where
    K: AsRef<str> + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a HeaderValue)>,
{
    let headers = headers.into_iter();
    let (header_hint, _) = headers.size_hint();

    let mut dst = BytesMut::with_capacity(INIT_REQUEST_HEAD_SIZE + header_hint * REQUEST_HEAD_SIZE_PER_HEADER);
    write_request_head(&mut dst, method, path, headers);
    dst
}

/// Appends a request head to `dst`.
pub fn write_request_head<'a, K, I>(dst: &mut BytesMut, method: &Method, path: &str, headers: I)
where
    K: AsRef<str> + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a HeaderValue)>,
{
    dst.put_slice(method.as_str().as_bytes());
    dst.put_u8(b' ');
    dst.put_slice(path.as_bytes());
    dst.put_u8(b' ');
    dst.put_slice(HTTP_11);
    dst.put_slice(b"\r\n");
    write_headers(dst, headers);
}

/// Encodes a `GET` request head for `path`.
pub fn encode_get_request<'a, K, I>(path: &str, headers: I) -> Bytes
where
    K: AsRef<str> + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a HeaderValue)>,
{
    encode_request_head(&Method::GET, path, headers).freeze()
}

fn write_headers<'a, K, I>(dst: &mut BytesMut, headers: I)
where
    K: AsRef<str> + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a HeaderValue)>,
{
    for (key, value) in headers {
        let key = key.as_ref();
        if value.line_count() == 0 {
            trace!(header_name = key, "skip header without values");
            continue;
        }

        for line in value {
            dst.put_slice(key.as_bytes());
            dst.put_slice(b": ");
            dst.put_slice(line.as_bytes());
            dst.put_slice(b"\r\n");
        }
    }
    dst.put_slice(b"\r\n");
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use indoc::indoc;

    use super::*;
    use crate::protocol::header::{CONTENT_LENGTH, CONTENT_TYPE, HOST, USER_AGENT};

    fn crlf(s: &str) -> String {
        s.replace('\n', "\r\n")
    }

    #[test]
    fn test_response_head() {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_LENGTH.to_string(), HeaderValue::from("11"));
        headers.insert(CONTENT_TYPE.to_string(), HeaderValue::from("text/plain"));

        let head = encode_response_head(200, &headers).unwrap();

        let expected = crlf(indoc! {"
            HTTP/1.1 200 OK
            Content-Length: 11
            Content-Type: text/plain

        "});
        assert_eq!(std::str::from_utf8(&head).unwrap(), expected);
    }

    #[test]
    fn test_multi_valued_header() {
        let mut headers = BTreeMap::new();
        headers.insert("Set-Cookie", HeaderValue::from(vec!["a=1", "b=2", "c=3"]));
        headers.insert("X-Trace", HeaderValue::from("t1"));

        let head = encode_response_head(200, &headers).unwrap();

        let expected = crlf(indoc! {"
            HTTP/1.1 200 OK
            Set-Cookie: a=1
            Set-Cookie: b=2
            Set-Cookie: c=3
            X-Trace: t1

        "});
        assert_eq!(std::str::from_utf8(&head).unwrap(), expected);
    }

    #[test]
    fn test_empty_multi_is_dropped() {
        let mut headers = BTreeMap::new();
        headers.insert("Set-Cookie", HeaderValue::Multi(vec![]));
        headers.insert("Server", HeaderValue::from("micro-wire"));

        let head = encode_response_head(204, &headers).unwrap();

        assert_eq!(&head[..], &b"HTTP/1.1 204 No Content\r\nServer: micro-wire\r\n\r\n"[..]);
    }

    #[test]
    fn test_no_headers() {
        let headers: BTreeMap<String, HeaderValue> = BTreeMap::new();
        let head = encode_response_head(404, &headers).unwrap();

        assert_eq!(&head[..], &b"HTTP/1.1 404 Not Found\r\n\r\n"[..]);
    }

    #[test]
    fn test_line_count_and_terminator() {
        let mut headers = HashMap::new();
        headers.insert("A", HeaderValue::from("1"));
        headers.insert("B", HeaderValue::from(vec!["1", "2"]));
        headers.insert("C", HeaderValue::Multi(vec![]));
        headers.insert("D", HeaderValue::from(vec!["x"]));

        let head = encode_response_head(500, &headers).unwrap();
        let text = std::str::from_utf8(&head).unwrap();

        assert!(text.ends_with("\r\n\r\n"));
        assert!(!text.ends_with("\r\n\r\n\r\n"));

        // status line + 4 header lines + empty line
        let lines: Vec<&str> = text.split_terminator("\r\n").collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "HTTP/1.1 500 Internal Server Error");
        assert_eq!(lines.iter().filter(|l| l.starts_with("B: ")).count(), 2);
        assert!(!text.contains("C:"));
    }

    #[test]
    fn test_unknown_status() {
        let headers: BTreeMap<String, HeaderValue> = BTreeMap::new();
        let result = encode_response_head(299, &headers);

        assert!(matches!(result, Err(SendError::UnknownStatus(299))));
    }

    #[test]
    fn test_unknown_status_writes_nothing() {
        let headers: BTreeMap<String, HeaderValue> = BTreeMap::new();
        let mut dst = BytesMut::from(&b"prefix"[..]);

        assert!(write_response_head(&mut dst, 1000, &headers).is_err());
        assert_eq!(&dst[..], &b"prefix"[..]);
    }

    #[test]
    fn test_parsed_by_httparse() {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Length", HeaderValue::from("0"));
        headers.insert("Set-Cookie", HeaderValue::from(vec!["a=1", "b=2"]));

        let head = encode_response_head(301, &headers).unwrap();

        let mut parsed_headers = [httparse::EMPTY_HEADER; 8];
        let mut response = httparse::Response::new(&mut parsed_headers);
        let status = response.parse(&head).unwrap();

        assert!(status.is_complete());
        assert_eq!(status.unwrap(), head.len());
        assert_eq!(response.code, Some(301));
        assert_eq!(response.reason, Some("Moved Permanently"));
        assert_eq!(response.headers.len(), 3);
    }

    #[test]
    fn test_request_head() {
        let mut headers = BTreeMap::new();
        headers.insert(HOST, HeaderValue::from("127.0.0.1:8080"));
        headers.insert(USER_AGENT, HeaderValue::from("curl/7.79.1"));

        let head = encode_request_head(&Method::POST, "/index.html?a=1", &headers);

        let expected = crlf(indoc! {"
            POST /index.html?a=1 HTTP/1.1
            Host: 127.0.0.1:8080
            User-Agent: curl/7.79.1

        "});
        assert_eq!(std::str::from_utf8(&head).unwrap(), expected);
    }

    #[test]
    fn test_get_request() {
        let mut headers = BTreeMap::new();
        headers.insert(HOST, HeaderValue::from("example.com"));
        headers.insert("Accept", HeaderValue::from(vec!["text/html", "*/*"]));

        let head = encode_get_request("/", &headers);

        let mut parsed_headers = [httparse::EMPTY_HEADER; 8];
        let mut request = httparse::Request::new(&mut parsed_headers);
        let status = request.parse(&head).unwrap();

        assert!(status.is_complete());
        assert_eq!(request.method, Some("GET"));
        assert_eq!(request.path, Some("/"));
        assert_eq!(request.version, Some(1));
        assert_eq!(request.headers.len(), 3);
        assert_eq!(request.headers[0].name, "Accept");
        assert_eq!(request.headers[0].value, b"text/html");
        assert_eq!(request.headers[1].value, b"*/*");
        assert_eq!(request.headers[2].name, "Host");
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let headers = vec![
            ("Zeta".to_string(), HeaderValue::from("1")),
            ("Alpha".to_string(), HeaderValue::from("2")),
        ];

        let head = encode_request_head(&Method::GET, "/", headers.iter().map(|(k, v)| (k, v)));

        assert_eq!(&head[..], &b"GET / HTTP/1.1\r\nZeta: 1\r\nAlpha: 2\r\n\r\n"[..]);
    }
}
