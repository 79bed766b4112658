//! Response decoding
//!
//! The body of every physical response is decoded once, by `Content-Type`,
//! before it is classified:
//!
//! - missing, `application/octet-stream` or `image/*`: [`ResponseBody::Binary`]
//! - `application/json`: [`ResponseBody::Json`]
//! - anything else: [`ResponseBody::Text`]

use crate::error::{Error, Result};
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use steamwebapi_transport::HttpResponse;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Structured JSON
    Json(serde_json::Value),
    /// UTF-8 text
    Text(String),
    /// Opaque bytes (images, octet streams, untyped bodies)
    Binary(Bytes),
}

impl ResponseBody {
    /// Decode raw bytes according to a `Content-Type` header value.
    ///
    /// A body declared as JSON that fails to parse is a
    /// [`Error::ResponseValidation`] for successful statuses; for error
    /// statuses it degrades to text so the server's message still surfaces.
    pub fn decode(content_type: Option<&str>, body: Bytes, status: u16) -> Result<Self> {
        let Some(content_type) = content_type else {
            return Ok(Self::Binary(body));
        };

        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == "application/octet-stream" || essence.starts_with("image/") {
            return Ok(Self::Binary(body));
        }

        if essence.starts_with("application/json") {
            return match serde_json::from_slice(&body) {
                Ok(value) => Ok(Self::Json(value)),
                Err(e) if (200..300).contains(&status) => Err(Error::ResponseValidation(
                    format!("invalid JSON body: {}", e),
                )),
                Err(_) => Ok(Self::Text(String::from_utf8_lossy(&body).into_owned())),
            };
        }

        Ok(Self::Text(String::from_utf8_lossy(&body).into_owned()))
    }

    /// Borrow the JSON value, if this is a JSON body.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the text, if this is a text body.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Borrow the bytes, if this is a binary body.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Render the body as text whatever its kind.
    pub fn to_text_lossy(&self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text.clone(),
            Self::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// A decoded HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HeaderMap,
    body: ResponseBody,
    attempts: u32,
    elapsed: Duration,
}

impl Response {
    /// Create a response from its parts.
    pub fn new(status: u16, headers: HeaderMap, body: ResponseBody) -> Self {
        Self {
            status,
            headers,
            body,
            attempts: 1,
            elapsed: Duration::ZERO,
        }
    }

    /// Decode a raw transport response.
    pub fn from_transport(raw: HttpResponse) -> Result<Self> {
        let headers = header_map(&raw.headers);
        let content_type = headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());
        let body = ResponseBody::decode(content_type, raw.body, raw.status)?;

        Ok(Self::new(raw.status, headers, body))
    }

    pub(crate) fn with_stats(mut self, attempts: u32, elapsed: Duration) -> Self {
        self.attempts = attempts;
        self.elapsed = elapsed;
        self
    }

    /// Get the status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a header value as text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get the decoded body.
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Take the decoded body.
    pub fn into_body(self) -> ResponseBody {
        self.body
    }

    /// Number of physical attempts it took to get this response.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Wall time from the first attempt to this response, backoff included.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Check if the response was successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the JSON body.
    pub fn parse<T: DeserializeOwned>(self) -> Result<T> {
        parse_body(self.body)
    }

    /// Deserialize the JSON body, keeping the HTTP metadata.
    pub fn into_parsed_raw<T: DeserializeOwned>(self) -> Result<RawResponse<T>> {
        let Self {
            status,
            headers,
            body,
            attempts,
            elapsed,
        } = self;
        let parsed = parse_body(body)?;

        Ok(RawResponse {
            parsed,
            status,
            headers,
            attempts,
            elapsed,
        })
    }
}

fn parse_body<T: DeserializeOwned>(body: ResponseBody) -> Result<T> {
    match body {
        ResponseBody::Json(value) => {
            serde_json::from_value(value).map_err(|e| Error::ResponseValidation(e.to_string()))
        }
        ResponseBody::Text(text) => Err(Error::ResponseValidation(format!(
            "expected a JSON body, got text: {}",
            truncate(&text, 200)
        ))),
        ResponseBody::Binary(bytes) => Err(Error::ResponseValidation(format!(
            "expected a JSON body, got {} bytes of binary data",
            bytes.len()
        ))),
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn header_map(headers: &HashMap<String, String>) -> HeaderMap {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            map.append(name, value);
        }
    }
    map
}

/// A parsed response together with its HTTP metadata.
#[derive(Debug, Clone)]
pub struct RawResponse<T> {
    parsed: T,
    status: u16,
    headers: HeaderMap,
    attempts: u32,
    elapsed: Duration,
}

impl<T> RawResponse<T> {
    /// Get the parsed body.
    pub fn parsed(&self) -> &T {
        &self.parsed
    }

    /// Take the parsed body.
    pub fn into_parsed(self) -> T {
        self.parsed
    }

    /// Get the status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Number of physical attempts it took.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Wall time across all attempts.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Requests left in the current rate-limit window, if reported.
    pub fn rate_limit_remaining(&self) -> Option<u64> {
        self.headers
            .get(super::retry::RATE_LIMIT_REMAINING_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse().ok())
    }
}
