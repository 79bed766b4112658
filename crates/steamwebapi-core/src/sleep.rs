//! Suspension abstraction for retry loops.
//!
//! Retry loops never call `tokio::time::sleep` directly. They go through a
//! [`Sleeper`], so the same loop can run against the tokio timer in
//! production and against a [`RecordingSleeper`] in tests, where every wait
//! is recorded and returns immediately.

use async_trait::async_trait;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Something that can suspend the current task for a duration.
///
/// Implementations must be cooperative: sleeping must not block other tasks
/// running on the same runtime.
#[async_trait]
pub trait Sleeper: Send + Sync + fmt::Debug {
    /// Suspend for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Records every requested sleep and returns without waiting.
///
/// Clones share the same record, so a test can keep one handle and give the
/// other to the code under test.
///
/// # Examples
///
/// ```rust
/// use steamwebapi_core::sleep::{RecordingSleeper, Sleeper};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let sleeper = RecordingSleeper::new();
/// sleeper.sleep(Duration::from_secs(3)).await;
///
/// assert_eq!(sleeper.recorded(), vec![Duration::from_secs(3)]);
/// assert_eq!(sleeper.total(), Duration::from_secs(3));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    /// Create a sleeper with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// All durations requested so far, in order.
    pub fn recorded(&self) -> Vec<Duration> {
        self.sleeps
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Sum of all durations requested so far.
    pub fn total(&self) -> Duration {
        self.recorded().into_iter().sum()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(duration);
    }
}
