//! Currency endpoints

use super::Resource;
use crate::{client::Client, error::Result, http::routes, types::ExchangeRates};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Currency API resource.
#[derive(Clone)]
pub struct Currency {
    client: Client,
}

/// The list endpoint answers with either a plain array of symbols or an
/// object keyed by symbol.
#[derive(Deserialize)]
#[serde(untagged)]
enum CurrencyList {
    Symbols(Vec<String>),
    Keyed(BTreeMap<String, serde_json::Value>),
}

impl Currency {
    /// Create a new Currency resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// ISO 4217 symbols the service can convert between.
    pub async fn list(&self) -> Result<Vec<String>> {
        let list: CurrencyList = self
            .client
            .request(routes::CURRENCY_LIST)?
            .send()
            .await?
            .parse()?;

        Ok(match list {
            CurrencyList::Symbols(symbols) => symbols,
            CurrencyList::Keyed(map) => map.into_keys().collect(),
        })
    }

    /// Exchange rates from `base` into every supported currency.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use steamwebapi::Client;
    /// # async fn example(client: Client) -> steamwebapi::Result<()> {
    /// let rates = client.currency().exchange("USD").await?;
    /// if let Some(eur) = rates.get("eur") {
    ///     println!("10 USD = {} EUR", eur.convert(10.0));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn exchange(&self, base: impl AsRef<str>) -> Result<ExchangeRates> {
        self.client
            .request(routes::CURRENCY_EXCHANGE)?
            .query("base", base.as_ref())
            .send()
            .await?
            .parse()
    }
}

impl Resource for Currency {
    fn client(&self) -> &Client {
        &self.client
    }
}
