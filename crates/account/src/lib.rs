//! Tally Account
//!
//! The accounting core of the trading simulator: one user's cash balance,
//! share holdings and chronological transaction ledger.
//!
//! - **Commands**: deposit, withdraw, buy and sell. Each one either fully
//!   applies (state mutated and exactly one [`Transaction`] appended) or
//!   fails with an [`AccountError`] and changes nothing.
//! - **Queries**: holdings, portfolio value, profit/loss and history. Derived
//!   values are recomputed from current state and current prices on every
//!   call; nothing is cached.
//!
//! ## Architecture
//!
//! ```text
//!   caller ──► command ──► validate ──► PriceOracle (buy/sell only)
//!                              │                │
//!                              ▼                ▼
//!                         ┌─────────────────────────┐
//!                         │         Account         │
//!                         │  cash / deposits        │
//!                         │  holdings               │◄── Clock (commit time)
//!                         │  transactions (append)  │
//!                         └────────────┬────────────┘
//!                                      │ queries
//!                                      ▼
//!                 holdings · portfolio value · PnL · history · summary
//! ```
//!
//! ## Usage
//!
//! ```
//! use rust_decimal::Decimal;
//! use tally_account::Account;
//!
//! let mut account = Account::builder("demo_user")
//!     .initial_deposit(Decimal::new(100_000, 2))
//!     .build()?;
//!
//! account.buy_shares("aapl", 4)?; // 4 x 175.25
//! assert_eq!(account.cash_balance(), Decimal::new(29_900, 2));
//! assert_eq!(account.profit_or_loss()?, Decimal::ZERO);
//! # Ok::<(), tally_account::AccountError>(())
//! ```

pub mod account;
pub mod config;
pub mod error;
pub mod shared;
pub mod summary;
pub mod transaction;

// Re-export main types
pub use account::{Account, AccountBuilder, Holdings};
pub use config::AccountConfig;
pub use error::{AccountError, Result};
pub use shared::SharedAccount;
pub use summary::{AccountSummary, PositionValue};
pub use transaction::{Transaction, TransactionId};

// Re-export the value types that appear in the public surface
pub use tally_core::{Money, Price, Quantity, Symbol, Timestamp, TransactionKind};
