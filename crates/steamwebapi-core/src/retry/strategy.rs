//! The backoff strategy trait.

use std::fmt;
use std::time::Duration;

/// A schedule for retrying failed operations.
///
/// Implementations decide how long to wait after a failed attempt and when to
/// give up. They never sleep themselves: the caller owns the loop and the
/// clock, which keeps the schedule testable without touching time.
///
/// Attempts are 0-indexed. `next_delay(0)` is the wait after the first
/// attempt failed and before the second one starts.
///
/// # Examples
///
/// ```rust
/// use steamwebapi_core::retry::BackoffStrategy;
/// use std::time::Duration;
///
/// #[derive(Debug)]
/// struct Fixed;
///
/// impl BackoffStrategy for Fixed {
///     fn next_delay(&self, attempt: u32) -> Option<Duration> {
///         (attempt + 1 < self.max_attempts()).then(|| Duration::from_millis(250))
///     }
///
///     fn max_attempts(&self) -> u32 {
///         3
///     }
/// }
///
/// assert_eq!(Fixed.next_delay(1), Some(Duration::from_millis(250)));
/// assert_eq!(Fixed.next_delay(2), None);
/// ```
pub trait BackoffStrategy: Send + Sync + fmt::Debug {
    /// Delay to wait after attempt `attempt` failed.
    ///
    /// Returns `None` when `attempt` was the last one allowed.
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// Total number of attempts, the first one included.
    fn max_attempts(&self) -> u32;

    /// Whether another attempt is allowed after attempt `attempt` failed.
    fn has_next(&self, attempt: u32) -> bool {
        attempt.saturating_add(1) < self.max_attempts()
    }
}
