//! Error types for the SteamWebAPI SDK
//!
//! Every fallible operation in the crate returns [`Error`]. Failures reported by
//! the service itself are grouped under [`Error::Api`], which pairs an
//! [`ApiErrorKind`] with the server's payload; local failures (bad identifiers,
//! bad configuration, transport problems) have their own variants.

use crate::http::ResponseBody;
use crate::steamid::InvalidSteamId;
use std::fmt;
use steamwebapi_transport::TransportError;
use thiserror::Error;

/// Result type alias for operations that can fail with a SteamWebAPI SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of an error reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400
    BadRequest,
    /// 401, the key is missing or invalid
    NotAuthenticated,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 429 with a wait longer than the configured ceiling, or no usable wait at all
    RateLimited,
    /// 5xx on every allowed attempt
    ServerError,
    /// Any other 4xx status from 405 upwards
    Other,
    /// A status outside every documented range (1xx, 3xx, 402, 600+)
    Unhandled,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadRequest => "Bad request",
            Self::NotAuthenticated => "Not authenticated",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not found",
            Self::RateLimited => "Rate limited",
            Self::ServerError => "Server error",
            Self::Other => "API error",
            Self::Unhandled => "Unhandled response",
        };
        f.write_str(name)
    }
}

/// The server's error payload, carried verbatim.
///
/// For a JSON object body, `error` and `message` are its fields of the same
/// name (empty when absent). For any other body both hold the body text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiErrorPayload {
    /// HTTP status code of the failing attempt
    pub status: u16,
    /// The `error` field, or the whole body for non-object responses
    pub error: String,
    /// The `message` field, or the whole body for non-object responses
    pub message: String,
}

impl ApiErrorPayload {
    /// Build a payload from a decoded response body.
    pub fn from_body(status: u16, body: &ResponseBody) -> Self {
        match body {
            ResponseBody::Json(serde_json::Value::Object(map)) => Self {
                status,
                error: json_field(map, "error"),
                message: json_field(map, "message"),
            },
            other => {
                let text = other.to_text_lossy();
                Self {
                    status,
                    error: text.clone(),
                    message: text,
                }
            }
        }
    }

    /// The most descriptive text available, preferring `message` over `error`.
    pub fn description(&self) -> &str {
        if !self.message.is_empty() {
            &self.message
        } else {
            &self.error
        }
    }
}

impl fmt::Display for ApiErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}: {}", self.status, self.description())
    }
}

fn json_field(map: &serde_json::Map<String, serde_json::Value>, key: &str) -> String {
    match map.get(key) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Main error type for the SteamWebAPI SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a terminal error status.
    #[error("{kind} ({payload})")]
    Api {
        /// What kind of failure the status maps to
        kind: ApiErrorKind,
        /// The server's payload
        payload: ApiErrorPayload,
    },

    /// A Steam identifier could not be parsed or converted.
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidSteamId),

    /// The physical round-trip failed before any status was received.
    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The round-trip exceeded its deadline.
    #[error("Request timeout")]
    Timeout,

    /// Failed to deserialize API response.
    #[error("Failed to parse API response: {0}")]
    ResponseValidation(String),

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        /// Context description
        context: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Other errors not covered by specific variants.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create an API error.
    pub fn api(kind: ApiErrorKind, payload: ApiErrorPayload) -> Self {
        Error::Api { kind, payload }
    }

    /// The API error kind, if this error was reported by the service.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::Api { kind, .. } => Some(*kind),
            Error::WithContext { source, .. } => source
                .downcast_ref::<Error>()
                .and_then(|inner| inner.api_kind()),
            _ => None,
        }
    }

    /// The server payload, if this error was reported by the service.
    pub fn payload(&self) -> Option<&ApiErrorPayload> {
        match self {
            Error::Api { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// The HTTP status of the failing attempt, if one was received.
    pub fn status(&self) -> Option<u16> {
        self.payload().map(|p| p.status)
    }

    /// Check if this error is worth retrying by the caller.
    ///
    /// Rate limits and server errors have already been retried internally by
    /// the time they surface; they stay retryable because a later call may
    /// still succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Api { kind, .. } => {
                matches!(kind, ApiErrorKind::RateLimited | ApiErrorKind::ServerError)
            }
            Error::Connection(_) | Error::Timeout => true,
            Error::Transport(err) => err.is_transient(),
            _ => false,
        }
    }

    /// Add context to an error.
    pub fn context<C>(self, context: C) -> Self
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        Error::WithContext {
            context: context.to_string(),
            source: Box::new(self),
        }
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout => Error::Timeout,
            TransportError::Connection(msg) => Error::Connection(msg),
            other => Error::Transport(other),
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Error::InvalidRequest(format!("missing required parameter `{}`", err.field_name()))
    }
}
