//! Account errors

use rust_decimal::Decimal;
use tally_core::{Money, Quantity, Symbol};
use tally_ports::OracleError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid owner id: must not be blank")]
    InvalidOwner,

    #[error("Invalid amount: {0} (must be positive)")]
    InvalidAmount(Decimal),

    #[error("Invalid quantity: {0} (must be a positive whole number of shares)")]
    InvalidQuantity(Quantity),

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Money, available: Money },

    #[error("Insufficient shares of {symbol}: requested {requested}, held {held}")]
    InsufficientShares {
        symbol: Symbol,
        requested: Quantity,
        held: Quantity,
    },

    #[error("No price available for symbol '{0}'")]
    UnknownSymbol(Symbol),

    #[error("Invalid price for {symbol}: {price} (must be positive)")]
    InvalidPrice { symbol: Symbol, price: Decimal },

    #[error("Price source unavailable: {0}")]
    PriceUnavailable(String),

    #[error("Arithmetic overflow computing {0}")]
    Overflow(&'static str),

    #[error("Invalid account configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AccountError>;

impl From<OracleError> for AccountError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::UnknownSymbol(symbol) => AccountError::UnknownSymbol(symbol),
            OracleError::Unavailable(reason) => AccountError::PriceUnavailable(reason),
        }
    }
}
