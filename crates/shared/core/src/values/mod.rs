use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

mod money;
mod symbol;

pub use money::{DEFAULT_MONEY_SCALE, MAX_MONEY_SCALE, round_money};
pub use symbol::Symbol;

/// Cash amount - uses Decimal for precision, never f64
pub type Money = Decimal;

/// Unit share price as reported by a price oracle
pub type Price = Decimal;

/// Whole number of shares; fractional shares are not supported
pub type Quantity = u64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
