use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("send error: {source}")]
    SendError {
        #[from]
        source: SendError,
    },

    #[error("parse error: {source}")]
    ParseError {
        #[from]
        source: ParseError,
    },

    #[error("connect error: {source}")]
    ConnectError {
        #[from]
        source: ConnectError,
    },

    #[error("read error: {source}")]
    ReadError {
        #[from]
        source: ReadError,
    },
}

/// Errors raised while encoding a message head.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("unknown status code: {0}")]
    UnknownStatus(u16),
}

impl SendError {
    pub fn unknown_status(code: u16) -> Self {
        Self::UnknownStatus(code)
    }
}

/// Errors raised while decoding protocol tokens.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed chunk size: {reason}")]
    MalformedChunkSize { reason: String },

    #[error("line size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeLine { current_size: usize, max_size: usize },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn malformed_chunk_size<S: ToString>(str: S) -> Self {
        Self::MalformedChunkSize { reason: str.to_string() }
    }

    pub fn too_large_line(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeLine { current_size, max_size }
    }
}

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("uri has no host")]
    MissingHost,

    #[error("unresolvable host {host}: {source}")]
    UnresolvableHost { host: String, source: io::Error },
}

impl ConnectError {
    pub fn unresolvable_host<S: ToString, E: Into<io::Error>>(host: S, e: E) -> Self {
        Self::UnresolvableHost { host: host.to_string(), source: e.into() }
    }
}

/// Errors raised by the blocking reader.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("short read, expected {expected} bytes but source ended after {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ReadError {
    pub fn short_read(expected: usize, actual: usize) -> Self {
        Self::ShortRead { expected, actual }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}
