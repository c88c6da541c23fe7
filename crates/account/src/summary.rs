//! Point-in-time valuation report for an account

use serde::{Deserialize, Serialize};
use tally_core::{Money, Price, Quantity, Symbol, Timestamp};

/// One holding valued at the current price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionValue {
    pub symbol: Symbol,
    pub quantity: Quantity,
    /// Unit price used for the valuation
    pub price: Price,
    /// price x quantity, unrounded
    pub market_value: Money,
}

/// Everything a statement view needs, computed from one set of price lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub owner_id: String,
    pub cash_balance: Money,
    pub total_deposits: Money,
    /// Cash plus the market value of all positions
    pub portfolio_value: Money,
    /// Portfolio value minus total deposits
    pub profit_or_loss: Money,
    /// Ordered by symbol
    pub positions: Vec<PositionValue>,
    pub transaction_count: usize,
    pub as_of: Timestamp,
}

impl AccountSummary {
    /// Market value of all positions, excluding cash
    pub fn holdings_value(&self) -> Money {
        self.portfolio_value - self.cash_balance
    }

    pub fn position(&self, symbol: &Symbol) -> Option<&PositionValue> {
        self.positions.iter().find(|p| &p.symbol == symbol)
    }
}
