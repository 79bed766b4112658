//! Structured logging for physical HTTP attempts
//!
//! Every attempt the retry engine makes is logged through this module so the
//! field names stay consistent: `method`, `url`, `attempt`, `status`,
//! `elapsed_ms`, `retries`.

use std::time::Duration;
use tracing::{debug, info, warn};

/// Metadata for one outgoing attempt.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URL, without query string
    pub url: String,
    /// 1-based physical attempt number
    pub attempt: u32,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            attempt: 1,
        }
    }

    /// Set the attempt number
    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }

    /// Log the attempt being sent
    pub fn log_attempt(&self) {
        debug!(
            method = %self.method,
            url = %self.url,
            attempt = self.attempt,
            "Sending HTTP request"
        );
    }
}

/// Metadata for one received response.
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Time since the first attempt of the logical request
    pub elapsed: Duration,
    /// Attempts made before this one
    pub retries: u32,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: u16, elapsed: Duration) -> Self {
        Self {
            status,
            elapsed,
            retries: 0,
        }
    }

    /// Set the number of retries
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Log the status of a single attempt
    pub fn log_attempt(&self, request: &RequestMetadata) {
        debug!(
            method = %request.method,
            url = %request.url,
            attempt = request.attempt,
            status = self.status,
            "Received HTTP response"
        );
    }

    /// Log successful completion of the logical request
    pub fn log_success(&self, request: &RequestMetadata) {
        info!(
            method = %request.method,
            url = %request.url,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            retries = self.retries,
            "HTTP request succeeded"
        );
    }

    /// Log terminal failure of the logical request
    pub fn log_error(&self, request: &RequestMetadata, error: &str) {
        warn!(
            method = %request.method,
            url = %request.url,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            error = %error,
            retries = self.retries,
            "HTTP request failed"
        );
    }
}

/// Log a rejected request parameter
pub fn log_validation_error(field: &str, reason: &str) {
    debug!(
        field = %field,
        reason = %reason,
        "Request validation failed"
    );
}

/// Install a global `tracing` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `steamwebapi=info` when `RUST_LOG` is unset. Does nothing if a
/// global subscriber is already installed.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("steamwebapi=info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
