//! The ledger's one rounding rule.

use rust_decimal::{Decimal, RoundingStrategy};

/// Default number of fractional digits kept on cash amounts (cents)
pub const DEFAULT_MONEY_SCALE: u32 = 2;

/// Largest scale a `Decimal` can represent
pub const MAX_MONEY_SCALE: u32 = 28;

/// Quantize a cash amount to `scale` fractional digits, rounding toward zero.
///
/// Every amount that enters the ledger passes through here exactly once, so
/// truncation never compounds across operations.
pub fn round_money(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::ToZero)
}
