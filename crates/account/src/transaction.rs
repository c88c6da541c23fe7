//! Immutable ledger entries

use serde::Serialize;
use std::fmt;
use tally_core::{Money, Price, Quantity, Symbol, Timestamp, TransactionKind};
use uuid::Uuid;

/// Unique identifier for a transaction
pub type TransactionId = Uuid;

/// The share side of a BUY or SELL
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TradeDetails {
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub share_price: Price,
}

/// One committed entry in an account's history
///
/// Only the account's commit step creates these, so a transaction's
/// `sequence` and `timestamp` always agree with its position in the history.
/// There is no public constructor and no mutable access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: TransactionId,
    /// 1-based position in the owning account's history
    sequence: u64,
    timestamp: Timestamp,
    kind: TransactionKind,
    /// Cash moved: the deposit/withdrawal amount, or price x quantity for a trade
    amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<Symbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_price: Option<Price>,
}

impl Transaction {
    pub(crate) fn new(
        sequence: u64,
        timestamp: Timestamp,
        kind: TransactionKind,
        amount: Money,
        trade: Option<TradeDetails>,
    ) -> Self {
        debug_assert_eq!(kind.is_trade(), trade.is_some());

        let (symbol, quantity, share_price) = match trade {
            Some(t) => (Some(t.symbol), Some(t.quantity), Some(t.share_price)),
            None => (None, None, None),
        };

        Self {
            id: Uuid::new_v4(),
            sequence,
            timestamp,
            kind,
            amount,
            symbol,
            quantity,
            share_price,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Traded symbol; `None` for deposits and withdrawals
    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    pub fn quantity(&self) -> Option<Quantity> {
        self.quantity
    }

    /// Unit price the trade executed at
    pub fn share_price(&self) -> Option<Price> {
        self.share_price
    }

    pub fn is_trade(&self) -> bool {
        self.kind.is_trade()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {}",
            self.sequence,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind
        )?;

        if let (Some(symbol), Some(quantity), Some(price)) =
            (&self.symbol, self.quantity, self.share_price)
        {
            write!(f, " {} {} @ {}", quantity, symbol, price)?;
        }

        write!(f, " {:.2}", self.amount)
    }
}
