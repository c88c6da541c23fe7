//! Tally Ports
//!
//! Port definitions (traits) for the Tally ledger.
//! These define the boundaries between the account state machine and the
//! services it consumes (prices, time).

mod clock;
mod error;
mod oracle;

pub use clock::Clock;
pub use error::{ConfigError, OracleError, OracleResult};
pub use oracle::PriceOracle;
