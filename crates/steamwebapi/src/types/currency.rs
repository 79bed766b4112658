//! Currency exchange types

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One currency's rate against the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code
    pub symbol: String,
    /// Units of this currency per unit of the base currency
    pub rate: f64,
    /// Decimal places prices are shown with
    pub precision: u32,
}

impl Currency {
    /// Convert an amount in the base currency, rounded to this currency's precision.
    pub fn convert(&self, amount: f64) -> f64 {
        let factor = 10f64.powi(self.precision as i32);
        (amount * self.rate * factor).round() / factor
    }
}

/// Exchange rates for every supported currency against one base.
///
/// Rates are ordered by symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRates {
    /// ISO 4217 code of the base currency
    pub base: String,
    /// Every quoted currency
    pub rates: Vec<Currency>,
}

impl ExchangeRates {
    /// ISO 4217 codes of every quoted currency.
    pub fn symbols(&self) -> Vec<&str> {
        self.rates.iter().map(|c| c.symbol.as_str()).collect()
    }

    /// Look up one currency by code.
    pub fn get(&self, symbol: &str) -> Option<&Currency> {
        self.rates.iter().find(|c| c.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Currencies keyed by ISO 4217 code.
    pub fn to_map(&self) -> HashMap<&str, &Currency> {
        self.rates.iter().map(|c| (c.symbol.as_str(), c)).collect()
    }
}

impl<'de> Deserialize<'de> for ExchangeRates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            base: String,
            rates: BTreeMap<String, f64>,
            #[serde(default)]
            precision: HashMap<String, u32>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let rates = wire
            .rates
            .into_iter()
            .map(|(symbol, rate)| {
                let precision = *wire.precision.get(&symbol).ok_or_else(|| {
                    D::Error::custom(format!("missing precision for currency '{}'", symbol))
                })?;
                Ok(Currency {
                    symbol,
                    rate,
                    precision,
                })
            })
            .collect::<Result<_, D::Error>>()?;

        Ok(Self {
            base: wire.base,
            rates,
        })
    }
}
