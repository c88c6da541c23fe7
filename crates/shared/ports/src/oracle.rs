use std::sync::Arc;
use tally_core::{Price, Symbol};

use crate::error::OracleResult;

/// Port for current share prices
///
/// Implementations range from a fixed reference table to a live feed.
/// Lookups are by normalized [`Symbol`], so matching is case-insensitive.
/// Callers must not cache answers: two calls in a row may legitimately
/// return different prices for a time-varying source.
///
/// A live adapter owns its own timeout and retry policy; it reports a
/// transient failure as [`OracleError::Unavailable`](crate::OracleError::Unavailable).
pub trait PriceOracle: Send + Sync {
    /// Current unit price for `symbol`. Must be strictly positive; the
    /// account rejects a zero or negative quote as `InvalidPrice`.
    fn price(&self, symbol: &Symbol) -> OracleResult<Price>;

    /// Get the oracle's name/identifier for debugging
    fn name(&self) -> &str {
        "PriceOracle"
    }
}

impl<O: PriceOracle + ?Sized> PriceOracle for Arc<O> {
    fn price(&self, symbol: &Symbol) -> OracleResult<Price> {
        (**self).price(symbol)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
