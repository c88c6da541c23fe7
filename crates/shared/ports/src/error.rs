use tally_core::Symbol;
use thiserror::Error;

/// Errors reported by a price oracle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("No price available for symbol '{0}'")]
    UnknownSymbol(Symbol),

    #[error("Price source unavailable: {0}")]
    Unavailable(String),
}

pub type OracleResult<T> = std::result::Result<T, OracleError>;

/// Errors raised while loading or validating configuration documents
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid price for {symbol}: {price} (must be positive)")]
    InvalidPrice { symbol: String, price: String },

    #[error("Invalid money scale {0} (must be at most {})", tally_core::MAX_MONEY_SCALE)]
    InvalidScale(u32),
}
