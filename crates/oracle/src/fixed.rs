use log::{debug, trace};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tally_core::{Price, Symbol};
use tally_ports::{ConfigError, OracleError, OracleResult, PriceOracle};

use crate::config::PriceTableConfig;

/// Price oracle answering from a fixed table
///
/// Stand-in for a live feed: a real adapter can replace it behind the
/// [`PriceOracle`] port without any change to the account.
#[derive(Debug, Clone)]
pub struct FixedPriceOracle {
    prices: HashMap<Symbol, Price>,
}

impl FixedPriceOracle {
    /// Oracle over the reference table (AAPL 175.25, TSLA 250.80, GOOGL 135.50)
    pub fn new() -> Self {
        Self::from_table(&PriceTableConfig::default())
    }

    /// Oracle that knows no symbols
    pub fn empty() -> Self {
        Self {
            prices: HashMap::new(),
        }
    }

    /// Build from a validated price table
    pub fn with_config(config: &PriceTableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_table(config))
    }

    fn from_table(config: &PriceTableConfig) -> Self {
        let prices: HashMap<Symbol, Price> = config.normalized().collect();
        debug!("Fixed price table loaded with {} symbols", prices.len());
        Self { prices }
    }

    /// Add or replace one price; non-positive prices are rejected
    pub fn with_price(mut self, symbol: &str, price: Decimal) -> Result<Self, ConfigError> {
        if price <= Decimal::ZERO {
            return Err(ConfigError::InvalidPrice {
                symbol: symbol.to_string(),
                price: price.to_string(),
            });
        }
        self.prices.insert(Symbol::new(symbol), price);
        Ok(self)
    }

    /// Symbols this oracle can price, sorted
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self.prices.keys().cloned().collect();
        symbols.sort();
        symbols
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for FixedPriceOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceOracle for FixedPriceOracle {
    fn price(&self, symbol: &Symbol) -> OracleResult<Price> {
        let price = self.prices.get(symbol).copied();

        match price {
            Some(price) => {
                trace!("Price lookup: {} -> {}", symbol, price);
                Ok(price)
            }
            None => Err(OracleError::UnknownSymbol(symbol.clone())),
        }
    }

    fn name(&self) -> &str {
        "FixedPriceOracle"
    }
}
