//! Tally Core Domain
//!
//! Pure value types for the Tally trading account ledger.
//! This crate contains no I/O and no shared state, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::TransactionKind;
pub use values::{
    DEFAULT_MONEY_SCALE, MAX_MONEY_SCALE, Money, Price, Quantity, Symbol, Timestamp, round_money,
};
