//! Header values as they are handed to the head encoder.
//!
//! A header key maps either to a single value or to an ordered sequence of
//! values. Each element of a sequence becomes its own header line on the wire,
//! which is how repeated headers such as `Set-Cookie` are expressed.

use std::slice;

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
pub const CONTENT_ENCODING: &str = "Content-Encoding";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONNECTION: &str = "Connection";
pub const HOST: &str = "Host";
pub const USER_AGENT: &str = "User-Agent";
pub const ACCEPT: &str = "Accept";
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";

/// The `Transfer-Encoding` token for chunked bodies.
pub const CHUNKED: &str = "chunked";

/// The value of one header key.
///
/// Values are written to the wire as-is. They must not contain CR or LF,
/// the encoder does not escape or check them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HeaderValue {
    /// A single header line.
    Scalar(String),
    /// One header line per element, in order. An empty sequence writes nothing.
    Multi(Vec<String>),
}

impl HeaderValue {
    /// Iterates the values that become header lines for this key.
    pub fn iter(&self) -> Iter<'_> {
        match self {
            HeaderValue::Scalar(value) => Iter::Scalar(Some(value)),
            HeaderValue::Multi(values) => Iter::Multi(values.iter()),
        }
    }

    /// Number of header lines this value produces.
    #[inline]
    pub fn line_count(&self) -> usize {
        match self {
            HeaderValue::Scalar(_) => 1,
            HeaderValue::Multi(values) => values.len(),
        }
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Scalar(value)
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Scalar(value.to_owned())
    }
}

impl From<Vec<String>> for HeaderValue {
    fn from(values: Vec<String>) -> Self {
        HeaderValue::Multi(values)
    }
}

impl From<Vec<&str>> for HeaderValue {
    fn from(values: Vec<&str>) -> Self {
        HeaderValue::Multi(values.into_iter().map(str::to_owned).collect())
    }
}

impl<'a> IntoIterator for &'a HeaderValue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the line values of a [`HeaderValue`].
#[derive(Debug, Clone)]
pub enum Iter<'a> {
    Scalar(Option<&'a String>),
    Multi(slice::Iter<'a, String>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::Scalar(value) => value.take().map(String::as_str),
            Iter::Multi(values) => values.next().map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_yields_one_line() {
        let value = HeaderValue::from("text/plain");
        assert_eq!(value.iter().collect::<Vec<_>>(), vec!["text/plain"]);
        assert_eq!(value.line_count(), 1);
    }

    #[test]
    fn multi_keeps_order() {
        let value = HeaderValue::from(vec!["b=2", "a=1", "c=3"]);
        assert_eq!(value.iter().collect::<Vec<_>>(), vec!["b=2", "a=1", "c=3"]);
        assert_eq!(value.line_count(), 3);
    }

    #[test]
    fn empty_multi_yields_nothing() {
        let value = HeaderValue::Multi(vec![]);
        assert_eq!(value.iter().next(), None);
        assert_eq!(value.line_count(), 0);
    }
}
