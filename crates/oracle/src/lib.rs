//! Tally Oracle
//!
//! Price oracle adapters implementing [`tally_ports::PriceOracle`].
//!
//! The only adapter shipped here is [`FixedPriceOracle`], a stand-in for a
//! live market data feed. It answers from a fixed table, either the built-in
//! reference table or one loaded from a JSON [`PriceTableConfig`]:
//!
//! ```json
//! { "prices": { "AAPL": "175.25", "TSLA": "250.80" } }
//! ```

pub mod config;
pub mod fixed;

pub use config::PriceTableConfig;
pub use fixed::FixedPriceOracle;

// Re-export the port for convenience
pub use tally_ports::{ConfigError, OracleError, OracleResult, PriceOracle};
