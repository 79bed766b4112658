//! Retry schedules.
//!
//! # Key Types
//!
//! - [`BackoffStrategy`] - how long to wait after a failed attempt, and when to stop
//! - [`LinearBackoff`] - fixed base delay plus a fixed step per attempt
//!
//! # Examples
//!
//! ```rust
//! use steamwebapi_core::retry::{BackoffStrategy, LinearBackoff};
//! use std::time::Duration;
//!
//! let backoff = LinearBackoff::default();
//! let delays: Vec<_> = (0..backoff.max_attempts())
//!     .filter_map(|attempt| backoff.next_delay(attempt))
//!     .collect();
//!
//! assert_eq!(
//!     delays,
//!     vec![
//!         Duration::from_secs(1),
//!         Duration::from_secs(3),
//!         Duration::from_secs(5),
//!         Duration::from_secs(7),
//!     ]
//! );
//! ```

mod linear;
mod strategy;

pub use linear::{LinearBackoff, LinearBackoffBuilder};
pub use strategy::BackoffStrategy;
