//! Linear backoff.

use super::strategy::BackoffStrategy;
use std::time::Duration;

/// Linear backoff: the wait after attempt `n` is `base + step * n`.
///
/// With the defaults (5 attempts, 1s base, 2s step) the waits before attempts
/// 2 through 5 are 1s, 3s, 5s and 7s, and there is no wait after the fifth
/// attempt because there is no sixth.
///
/// # Examples
///
/// ```rust
/// use steamwebapi_core::retry::{BackoffStrategy, LinearBackoff};
/// use std::time::Duration;
///
/// let backoff = LinearBackoff::builder()
///     .max_attempts(3)
///     .base(Duration::from_millis(100))
///     .step(Duration::from_millis(50))
///     .build();
///
/// assert_eq!(backoff.next_delay(0), Some(Duration::from_millis(100)));
/// assert_eq!(backoff.next_delay(1), Some(Duration::from_millis(150)));
/// assert_eq!(backoff.next_delay(2), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearBackoff {
    max_attempts: u32,
    base: Duration,
    step: Duration,
}

impl LinearBackoff {
    /// Default number of attempts, the first one included.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

    /// Default delay after the first failed attempt.
    pub const DEFAULT_BASE: Duration = Duration::from_secs(1);

    /// Default increase of the delay per failed attempt.
    pub const DEFAULT_STEP: Duration = Duration::from_secs(2);

    /// Create a new builder.
    pub fn builder() -> LinearBackoffBuilder {
        LinearBackoffBuilder::default()
    }

    /// Delay after the first failed attempt.
    pub fn base(&self) -> Duration {
        self.base
    }

    /// Increase of the delay per failed attempt.
    pub fn step(&self) -> Duration {
        self.step
    }
}

impl Default for LinearBackoff {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            base: Self::DEFAULT_BASE,
            step: Self::DEFAULT_STEP,
        }
    }
}

impl BackoffStrategy for LinearBackoff {
    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        if !self.has_next(attempt) {
            return None;
        }
        Some(self.base.saturating_add(self.step.saturating_mul(attempt)))
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

/// Builder for [`LinearBackoff`].
#[derive(Debug, Default)]
pub struct LinearBackoffBuilder {
    max_attempts: Option<u32>,
    base: Option<Duration>,
    step: Option<Duration>,
}

impl LinearBackoffBuilder {
    /// Set the total number of attempts. Values below 1 are raised to 1.
    ///
    /// Default: 5
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    /// Set the delay after the first failed attempt.
    ///
    /// Default: 1s
    pub fn base(mut self, base: Duration) -> Self {
        self.base = Some(base);
        self
    }

    /// Set the increase of the delay per failed attempt.
    ///
    /// Default: 2s
    pub fn step(mut self, step: Duration) -> Self {
        self.step = Some(step);
        self
    }

    /// Build the backoff, using defaults for unset parameters.
    pub fn build(self) -> LinearBackoff {
        LinearBackoff {
            max_attempts: self
                .max_attempts
                .unwrap_or(LinearBackoff::DEFAULT_MAX_ATTEMPTS),
            base: self.base.unwrap_or(LinearBackoff::DEFAULT_BASE),
            step: self.step.unwrap_or(LinearBackoff::DEFAULT_STEP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_schedule() {
        let backoff = LinearBackoff::default();

        assert_eq!(backoff.max_attempts(), 5);
        assert_eq!(backoff.next_delay(0), Some(Duration::from_secs(1)));
        assert_eq!(backoff.next_delay(1), Some(Duration::from_secs(3)));
        assert_eq!(backoff.next_delay(2), Some(Duration::from_secs(5)));
        assert_eq!(backoff.next_delay(3), Some(Duration::from_secs(7)));
        assert_eq!(backoff.next_delay(4), None);
    }

    #[test]
    fn test_single_attempt_never_waits() {
        let backoff = LinearBackoff::builder().max_attempts(1).build();
        assert!(!backoff.has_next(0));
        assert_eq!(backoff.next_delay(0), None);
    }

    #[test]
    fn test_zero_attempts_clamped_to_one() {
        let backoff = LinearBackoff::builder().max_attempts(0).build();
        assert_eq!(backoff.max_attempts(), 1);
    }

    #[test]
    fn test_builder_overrides() {
        let backoff = LinearBackoff::builder()
            .base(Duration::from_millis(10))
            .step(Duration::ZERO)
            .build();

        assert_eq!(backoff.base(), Duration::from_millis(10));
        assert_eq!(backoff.step(), Duration::ZERO);
        assert_eq!(backoff.next_delay(3), Some(Duration::from_millis(10)));
    }

    proptest! {
        #[test]
        fn delays_grow_by_step(attempt in 0u32..1000) {
            let backoff = LinearBackoff::builder().max_attempts(1002).build();
            let current = backoff.next_delay(attempt).unwrap();
            let next = backoff.next_delay(attempt + 1).unwrap();
            prop_assert_eq!(next - current, backoff.step());
        }

        #[test]
        fn no_delay_past_last_attempt(max in 1u32..50, extra in 0u32..50) {
            let backoff = LinearBackoff::builder().max_attempts(max).build();
            prop_assert_eq!(backoff.next_delay(max - 1 + extra), None);
        }
    }
}
