//! Account endpoint

use super::Resource;
use crate::{
    client::Client, error::Result, http::RawResponse, http::routes, types::AccountInformation,
};

/// Account API resource.
///
/// Reports the plan and usage of the API key the client was built with.
#[derive(Clone)]
pub struct Account {
    client: Client,
}

impl Account {
    /// Create a new Account resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Usage counters and subscription details for the current key.
    pub async fn me(&self) -> Result<AccountInformation> {
        self.client
            .request(routes::ACCOUNT_ME)?
            .send()
            .await?
            .parse()
    }

    /// Enable raw response mode.
    ///
    /// Returns a wrapper whose methods keep the status code, headers and
    /// attempt count alongside the parsed body.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use steamwebapi::Client;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let raw = client.account().with_raw_response().me().await?;
    ///
    /// if let Some(remaining) = raw.rate_limit_remaining() {
    ///     println!("{} requests left in this window", remaining);
    /// }
    /// println!("{} requests this month", raw.parsed().month);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_raw_response(&self) -> AccountRaw {
        AccountRaw {
            client: self.client.clone(),
        }
    }
}

impl Resource for Account {
    fn client(&self) -> &Client {
        &self.client
    }
}

/// Account resource in raw response mode.
#[derive(Clone)]
pub struct AccountRaw {
    client: Client,
}

impl AccountRaw {
    /// Same as [`Account::me`], with HTTP metadata.
    pub async fn me(&self) -> Result<RawResponse<AccountInformation>> {
        self.client
            .request(routes::ACCOUNT_ME)?
            .send()
            .await?
            .into_parsed_raw()
    }
}
