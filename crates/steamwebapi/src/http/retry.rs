//! Retry engine
//!
//! One logical request becomes one or more physical attempts. After each
//! attempt the response is classified and [`AttemptState::advance`] decides
//! whether the call finishes, fails, or waits and tries again:
//!
//! | Status          | Outcome                                                  |
//! |-----------------|----------------------------------------------------------|
//! | 2xx             | finish                                                   |
//! | 400/401/403/404 | fail immediately                                         |
//! | 429             | wait the advertised delay (up to a ceiling), then retry  |
//! | 405-499         | fail immediately                                         |
//! | 5xx             | retry on a linear schedule, fail once attempts run out   |
//! | anything else   | fail as unhandled                                        |
//!
//! Rate-limit waits do not count against the server-error budget.
//! The state machine does no I/O; [`RetryEngine`] drives it over a
//! [`Transport`] and a [`Sleeper`].

use super::response::Response;
use crate::error::{ApiErrorKind, ApiErrorPayload, Error, Result};
use crate::observability::{RequestMetadata, ResponseMetadata};
use std::sync::Arc;
use std::time::{Duration, Instant};
use steamwebapi_core::retry::{BackoffStrategy, LinearBackoff};
use steamwebapi_core::sleep::{Sleeper, TokioSleeper};
use steamwebapi_transport::{HttpRequest, Transport};
use tracing::warn;

/// Seconds until the rate-limit window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";
/// Requests left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
/// Standard fallback delay header.
pub const RETRY_AFTER_HEADER: &str = "retry-after";

/// Retry policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Schedule for 5xx responses; its attempt count bounds server-error retries
    pub server_backoff: LinearBackoff,
    /// Longest rate-limit wait that is honored; longer waits fail the call
    pub rate_limit_ceiling: Duration,
}

impl RetryConfig {
    /// Default ceiling for rate-limit waits.
    pub const DEFAULT_RATE_LIMIT_CEILING: Duration = Duration::from_secs(30);

    /// Maximum physical attempts for a request that keeps failing with 5xx.
    pub fn max_server_attempts(&self) -> u32 {
        self.server_backoff.max_attempts()
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            server_backoff: LinearBackoff::default(),
            rate_limit_ceiling: Self::DEFAULT_RATE_LIMIT_CEILING,
        }
    }
}

/// How a single physical response is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// 2xx
    Success,
    /// A terminal API error
    FailFast(ApiErrorKind),
    /// 429
    RateLimited,
    /// 5xx
    ServerError,
    /// Outside every documented range
    Unhandled,
}

/// Classify a status code.
pub fn classify(status: u16) -> Classification {
    match status {
        200..=299 => Classification::Success,
        400 => Classification::FailFast(ApiErrorKind::BadRequest),
        401 => Classification::FailFast(ApiErrorKind::NotAuthenticated),
        403 => Classification::FailFast(ApiErrorKind::Forbidden),
        404 => Classification::FailFast(ApiErrorKind::NotFound),
        429 => Classification::RateLimited,
        405..=499 => Classification::FailFast(ApiErrorKind::Other),
        500..=599 => Classification::ServerError,
        _ => Classification::Unhandled,
    }
}

/// Parse a non-negative, finite number of seconds.
fn parse_seconds(value: &str) -> Option<Duration> {
    let secs: f64 = value.trim().parse().ok()?;
    if secs.is_finite() && secs >= 0.0 {
        Duration::try_from_secs_f64(secs).ok()
    } else {
        None
    }
}

/// How long a 429 response asks the client to wait.
///
/// `X-Ratelimit-Reset` wins unless it is zero (or missing) while
/// `X-Ratelimit-Remaining` is absent, in which case `Retry-After` is used.
/// Returns `None` when no usable delay is advertised.
pub fn rate_limit_delay(response: &Response) -> Option<Duration> {
    let reset = response
        .header(RATE_LIMIT_RESET_HEADER)
        .and_then(parse_seconds)
        .unwrap_or(Duration::ZERO);

    if reset.is_zero() && response.header(RATE_LIMIT_REMAINING_HEADER).is_none() {
        response.header(RETRY_AFTER_HEADER).and_then(parse_seconds)
    } else {
        Some(reset)
    }
}

/// Why the engine is about to wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryReason {
    /// 429
    RateLimited,
    /// 5xx
    ServerError,
}

/// Decision taken after one physical attempt.
#[derive(Debug)]
pub enum Step {
    /// Return the response to the caller
    Finish,
    /// Surface this error to the caller
    Fail(Error),
    /// Sleep for `delay`, then re-issue the same request
    Retry {
        /// How long to wait
        delay: Duration,
        /// What triggered the wait
        reason: RetryReason,
    },
}

/// Per-call retry bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptState {
    server_attempt: u32,
    physical_attempts: u32,
    rate_limit_waits: u32,
    total_backoff: Duration,
    last_status: Option<u16>,
}

impl AttemptState {
    /// Fresh state for a new logical request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one physical response and decide what happens next.
    pub fn advance(&mut self, response: &Response, config: &RetryConfig) -> Step {
        let status = response.status();
        self.physical_attempts += 1;
        self.last_status = Some(status);

        let fail = |kind| {
            Step::Fail(Error::api(
                kind,
                ApiErrorPayload::from_body(status, response.body()),
            ))
        };

        match classify(status) {
            Classification::Success => Step::Finish,
            Classification::FailFast(kind) => fail(kind),
            Classification::Unhandled => fail(ApiErrorKind::Unhandled),
            Classification::RateLimited => match rate_limit_delay(response) {
                Some(delay) if delay <= config.rate_limit_ceiling => {
                    self.rate_limit_waits += 1;
                    self.total_backoff += delay;
                    Step::Retry {
                        delay,
                        reason: RetryReason::RateLimited,
                    }
                }
                _ => fail(ApiErrorKind::RateLimited),
            },
            Classification::ServerError => {
                match config.server_backoff.next_delay(self.server_attempt) {
                    Some(delay) => {
                        self.server_attempt += 1;
                        self.total_backoff += delay;
                        Step::Retry {
                            delay,
                            reason: RetryReason::ServerError,
                        }
                    }
                    None => fail(ApiErrorKind::ServerError),
                }
            }
        }
    }

    /// Physical attempts made so far.
    pub fn physical_attempts(&self) -> u32 {
        self.physical_attempts
    }

    /// Server-error retries scheduled so far.
    pub fn server_retries(&self) -> u32 {
        self.server_attempt
    }

    /// Rate-limit waits scheduled so far.
    pub fn rate_limit_waits(&self) -> u32 {
        self.rate_limit_waits
    }

    /// Sum of all scheduled delays.
    pub fn total_backoff(&self) -> Duration {
        self.total_backoff
    }

    /// Status of the most recent attempt.
    pub fn last_status(&self) -> Option<u16> {
        self.last_status
    }
}

/// Drives [`AttemptState`] over a transport and a sleeper.
///
/// Holds no per-call state, so one engine serves any number of concurrent
/// requests. Dropping the future returned by [`RetryEngine::execute`] cancels
/// the call; no further attempt is made.
#[derive(Debug, Clone)]
pub struct RetryEngine {
    transport: Arc<dyn Transport>,
    sleeper: Arc<dyn Sleeper>,
    config: RetryConfig,
}

impl RetryEngine {
    /// Create an engine that sleeps on the tokio clock.
    pub fn new(transport: Arc<dyn Transport>, config: RetryConfig) -> Self {
        Self {
            transport,
            sleeper: Arc::new(TokioSleeper),
            config,
        }
    }

    /// Replace the sleeper.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// The retry policy.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Run one logical request to completion.
    pub async fn execute(&self, request: HttpRequest) -> Result<Response> {
        let started = Instant::now();
        let mut state = AttemptState::new();

        loop {
            let metadata = RequestMetadata::new(request.method.as_str(), &request.url)
                .with_attempt(state.physical_attempts() + 1);
            metadata.log_attempt();

            let raw = self.transport.send_http(request.clone()).await?;
            let response = Response::from_transport(raw)?;

            let response_metadata = ResponseMetadata::new(response.status(), started.elapsed())
                .with_retries(state.physical_attempts());
            response_metadata.log_attempt(&metadata);

            match state.advance(&response, &self.config) {
                Step::Finish => {
                    response_metadata.log_success(&metadata);
                    return Ok(response.with_stats(state.physical_attempts(), started.elapsed()));
                }
                Step::Fail(error) => {
                    response_metadata.log_error(&metadata, &error.to_string());
                    return Err(error);
                }
                Step::Retry { delay, reason } => {
                    match reason {
                        RetryReason::RateLimited => warn!(
                            url = %request.url,
                            delay_secs = delay.as_secs_f64(),
                            "We are being rate limited. Retrying after delay"
                        ),
                        RetryReason::ServerError => warn!(
                            url = %request.url,
                            status = response.status(),
                            attempt = state.physical_attempts(),
                            delay_secs = delay.as_secs_f64(),
                            "Server error. Retrying after delay"
                        ),
                    }
                    self.sleeper.sleep(delay).await;
                }
            }
        }
    }
}
