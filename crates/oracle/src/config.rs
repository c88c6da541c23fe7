//! Price table configuration
//!
//! Loaded from JSON. Prices are decimal strings so no value ever passes
//! through binary floating point.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tally_core::Symbol;
use tally_ports::ConfigError;

/// Fixed prices keyed by ticker symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTableConfig {
    /// Unit price per symbol; keys are normalized to upper case on load
    #[serde(default)]
    pub prices: BTreeMap<String, Decimal>,
}

impl Default for PriceTableConfig {
    /// The reference table: AAPL, TSLA and GOOGL
    fn default() -> Self {
        let prices = [
            ("AAPL", dec!(175.25)),
            ("TSLA", dec!(250.80)),
            ("GOOGL", dec!(135.50)),
        ]
        .into_iter()
        .map(|(symbol, price)| (symbol.to_string(), price))
        .collect();

        Self { prices }
    }
}

impl PriceTableConfig {
    /// An empty table; every lookup fails
    pub fn empty() -> Self {
        Self {
            prices: BTreeMap::new(),
        }
    }

    /// Load a price table from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse a price table from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Add or replace one price
    pub fn with_price(mut self, symbol: &str, price: Decimal) -> Self {
        self.prices.insert(symbol.to_string(), price);
        self
    }

    /// Every price must be strictly positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (symbol, price) in &self.prices {
            if *price <= Decimal::ZERO {
                return Err(ConfigError::InvalidPrice {
                    symbol: symbol.clone(),
                    price: price.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Normalized (symbol, price) pairs
    pub(crate) fn normalized(&self) -> impl Iterator<Item = (Symbol, Decimal)> + '_ {
        self.prices
            .iter()
            .map(|(symbol, price)| (Symbol::new(symbol), *price))
    }
}
