//! Transport error types

use std::fmt;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur while performing one physical round-trip.
///
/// These never carry an HTTP status: a response with any status code is a
/// successful round-trip as far as the transport is concerned, and its
/// classification belongs to the SDK layer.
#[derive(Debug)]
pub enum TransportError {
    /// The request could not be built (bad URL, bad header, bad method)
    InvalidRequest(String),

    /// Connection error
    Connection(String),

    /// The request or the body read exceeded its deadline
    Timeout,

    /// Other HTTP client error (protocol error, body decode failure)
    Http(String),

    /// I/O error
    Io(std::io::Error),

    /// The transport was closed before this request was issued
    Closed,
}

impl TransportError {
    /// Whether retrying the same request could reasonably succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout)
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            Self::Connection(msg) => write!(f, "Connection error: {}", msg),
            Self::Timeout => write!(f, "Timeout"),
            Self::Http(msg) => write!(f, "HTTP error: {}", msg),
            Self::Io(err) => write!(f, "I/O error: {}", err),
            Self::Closed => write!(f, "Transport is closed"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}
