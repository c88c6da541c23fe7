//! Thread-safe handle to one account
//!
//! Commands hold the write lock for their whole duration, so the price
//! lookup and the mutation it gates form one exclusive section and no
//! reader can observe a half-applied command.

use parking_lot::RwLock;
use std::sync::Arc;
use tally_core::{Money, Quantity, Symbol};

use crate::account::{Account, Holdings};
use crate::error::Result;
use crate::summary::AccountSummary;
use crate::transaction::Transaction;

/// Cloneable, `Send + Sync` handle serializing access to one [`Account`]
#[derive(Debug, Clone)]
pub struct SharedAccount {
    inner: Arc<RwLock<Account>>,
}

impl SharedAccount {
    pub fn new(account: Account) -> Self {
        Self {
            inner: Arc::new(RwLock::new(account)),
        }
    }

    // ========== Commands (exclusive) ==========

    pub fn deposit(&self, amount: Money) -> Result<Transaction> {
        self.inner.write().deposit(amount)
    }

    pub fn withdraw(&self, amount: Money) -> Result<Transaction> {
        self.inner.write().withdraw(amount)
    }

    pub fn buy_shares(&self, symbol: impl Into<Symbol>, quantity: Quantity) -> Result<Transaction> {
        self.inner.write().buy_shares(symbol, quantity)
    }

    pub fn sell_shares(
        &self,
        symbol: impl Into<Symbol>,
        quantity: Quantity,
    ) -> Result<Transaction> {
        self.inner.write().sell_shares(symbol, quantity)
    }

    // ========== Queries (shared) ==========

    pub fn cash_balance(&self) -> Money {
        self.inner.read().cash_balance()
    }

    pub fn total_deposits(&self) -> Money {
        self.inner.read().total_deposits()
    }

    pub fn holdings(&self) -> Holdings {
        self.inner.read().holdings()
    }

    pub fn portfolio_value(&self) -> Result<Money> {
        self.inner.read().portfolio_value()
    }

    pub fn profit_or_loss(&self) -> Result<Money> {
        self.inner.read().profit_or_loss()
    }

    pub fn transaction_history(&self) -> Vec<Transaction> {
        self.inner.read().transaction_history()
    }

    pub fn summary(&self) -> Result<AccountSummary> {
        self.inner.read().summary()
    }

    /// Run several reads against one consistent state
    pub fn read<R>(&self, f: impl FnOnce(&Account) -> R) -> R {
        f(&self.inner.read())
    }

    /// Detached copy of the current state
    pub fn snapshot(&self) -> Account {
        self.inner.read().clone()
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_handles_share_state() {
        let account = Account::builder("test_user")
            .initial_deposit(dec!(1000))
            .build()
            .unwrap();
        let shared = SharedAccount::new(account);
        let other = shared.clone();

        other.buy_shares("AAPL", 4).unwrap();
        assert_eq!(shared.cash_balance(), dec!(299.00));
        assert_eq!(shared.holdings()[&Symbol::new("AAPL")], 4);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared: SharedAccount = Account::builder("test_user")
            .initial_deposit(dec!(100))
            .build()
            .unwrap()
            .into();
        let snapshot = shared.snapshot();
        shared.withdraw(dec!(40)).unwrap();

        assert_eq!(snapshot.cash_balance(), dec!(100));
        assert_eq!(shared.cash_balance(), dec!(60));
    }

    #[test]
    fn test_read_sees_consistent_state() {
        let shared: SharedAccount = Account::builder("test_user")
            .initial_deposit(dec!(500))
            .build()
            .unwrap()
            .into();
        shared.buy_shares("GOOGL", 2).unwrap();

        let (cash, value) = shared.read(|a| (a.cash_balance(), a.portfolio_value()));
        assert_eq!(cash, dec!(229.00));
        assert_eq!(value.unwrap(), dec!(500.00));
    }
}
