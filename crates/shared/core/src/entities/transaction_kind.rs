use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Cash paid into the account
    Deposit,
    /// Cash taken out of the account
    Withdraw,
    /// Shares bought with cash
    Buy,
    /// Shares sold for cash
    Sell,
}

impl TransactionKind {
    /// Whether this kind moves shares (and so carries symbol, quantity and price)
    pub fn is_trade(&self) -> bool {
        matches!(self, TransactionKind::Buy | TransactionKind::Sell)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdraw => "WITHDRAW",
            TransactionKind::Buy => "BUY",
            TransactionKind::Sell => "SELL",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTransactionKindError(pub String);

impl fmt::Display for ParseTransactionKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown transaction kind: {}", self.0)
    }
}

impl std::error::Error for ParseTransactionKindError {}

impl FromStr for TransactionKind {
    type Err = ParseTransactionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEPOSIT" => Ok(TransactionKind::Deposit),
            "WITHDRAW" => Ok(TransactionKind::Withdraw),
            "BUY" => Ok(TransactionKind::Buy),
            "SELL" => Ok(TransactionKind::Sell),
            _ => Err(ParseTransactionKindError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        for kind in [
            TransactionKind::Deposit,
            TransactionKind::Withdraw,
            TransactionKind::Buy,
            TransactionKind::Sell,
        ] {
            assert_eq!(kind.to_string().parse::<TransactionKind>(), Ok(kind));
        }
        assert_eq!("buy".parse::<TransactionKind>(), Ok(TransactionKind::Buy));
        assert!("TRANSFER".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_is_trade() {
        assert!(TransactionKind::Buy.is_trade());
        assert!(TransactionKind::Sell.is_trade());
        assert!(!TransactionKind::Deposit.is_trade());
        assert!(!TransactionKind::Withdraw.is_trade());
    }

    #[test]
    fn test_serde_uses_upper_case_names() {
        let json = serde_json::to_string(&TransactionKind::Withdraw).unwrap();
        assert_eq!(json, "\"WITHDRAW\"");
    }
}
