//! Transport trait and the request/response types it moves
//!
//! A [`Transport`] performs exactly one physical round-trip per call. It does
//! not retry, classify status codes, or decode bodies; the SDK's retry engine
//! does all of that on top of it.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use std::collections::HashMap;
use std::fmt;

/// HTTP request specification
///
/// Represents one HTTP request to be sent via the Transport. Cloning is cheap
/// enough to re-issue the same request on every retry.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: Method,

    /// Request URL, without query string
    pub url: String,

    /// Query parameters, in the order they are sent
    pub query: Vec<(String, String)>,

    /// Request headers
    pub headers: HashMap<String, String>,

    /// Request body (optional)
    pub body: Option<Bytes>,
}

impl HttpRequest {
    /// Create a new HTTP request
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Append a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the request body
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Get a query parameter value by name (first occurrence)
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a header value by name (case-insensitive)
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP response
///
/// Represents an HTTP response received from the server, whatever its status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    pub headers: HashMap<String, String>,

    /// Response body
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a new HTTP response
    pub fn new(status: u16, headers: HashMap<String, String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value by name (case-insensitive)
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Performs physical HTTP round-trips.
///
/// One transport is shared by every logical call made through a client, so
/// implementations must be safe to call concurrently.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send an HTTP request and receive a response
    ///
    /// Any status code is a successful round-trip. Errors are reserved for
    /// failures to get a response at all.
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse>;

    /// Check if the transport has been closed
    fn is_closed(&self) -> bool;

    /// Release the underlying connections
    ///
    /// Requests issued after closing fail with `TransportError::Closed`.
    async fn close(&self) -> Result<()>;
}
