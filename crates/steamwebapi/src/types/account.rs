//! Account usage types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Usage counters and subscription details for the calling API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInformation {
    /// Free-form account details
    pub info: Value,

    /// Requests made in the current minute
    pub minute: u64,

    /// Requests made in the current hour
    pub hour: u64,

    /// Requests made today
    pub today: u64,

    /// Requests made yesterday
    pub yesterday: u64,

    /// Requests made this week
    pub week: u64,

    /// Requests made this month
    pub month: u64,

    /// Subscription package name
    pub package: String,

    /// Subscription start, as reported
    #[serde(rename = "subscriptionstart")]
    pub subscription_start: String,

    /// Subscription end, as reported
    #[serde(rename = "subscriptionuntil")]
    pub subscription_end: String,

    /// Service status summary
    #[serde(rename = "steamwebapistatus")]
    pub steamwebapi_status: Value,

    /// The last hundred requests
    #[serde(rename = "last100", default)]
    pub last_100: Vec<Value>,
}
