//! API resource endpoints
//!
//! Endpoints are grouped the way the service groups them: account,
//! Steam data and currencies. Each handle holds a clone of the client.

pub mod account;
pub mod currency;
pub mod steam;

pub use account::{Account, AccountRaw};
pub use currency::Currency;
pub use steam::{Screenshot, Steam};

use crate::client::Client;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}
