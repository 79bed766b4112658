#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core abstractions for the steamwebapi crates.
//!
//! This crate holds the pieces of the retry machinery that do not depend on
//! HTTP at all:
//!
//! - **Backoff schedules** via the `BackoffStrategy` trait
//!   - `LinearBackoff`: `base + step * attempt`, bounded by a maximum attempt count
//! - **Suspension** via the `Sleeper` trait, so retry loops can be driven by
//!   tokio in production and by a recording clock in tests
//!
//! # Examples
//!
//! ```rust
//! use steamwebapi_core::prelude::*;
//! use std::time::Duration;
//!
//! let backoff = LinearBackoff::builder()
//!     .max_attempts(5)
//!     .base(Duration::from_secs(1))
//!     .step(Duration::from_secs(2))
//!     .build();
//!
//! assert_eq!(backoff.next_delay(0), Some(Duration::from_secs(1)));
//! assert_eq!(backoff.next_delay(3), Some(Duration::from_secs(7)));
//! assert_eq!(backoff.next_delay(4), None);
//! ```

pub mod retry;
pub mod sleep;

/// Convenient re-exports of commonly used items.
///
/// ```rust
/// use steamwebapi_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::retry::{BackoffStrategy, LinearBackoff, LinearBackoffBuilder};
    pub use crate::sleep::{RecordingSleeper, Sleeper, TokioSleeper};
}
