//! Trading account: cash balance, share holdings and the transaction ledger.
//!
//! Every command validates in a fixed order (input shape, then business
//! rules, then the price lookup) and touches no field until all checks and
//! arithmetic have succeeded. A failed command therefore leaves cash,
//! holdings and history exactly as they were.

use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tally_clock::SystemClock;
use tally_core::{Money, Price, Quantity, Symbol, TransactionKind, round_money};
use tally_oracle::FixedPriceOracle;
use tally_ports::{Clock, PriceOracle};

use crate::config::AccountConfig;
use crate::error::{AccountError, Result};
use crate::summary::{AccountSummary, PositionValue};
use crate::transaction::{TradeDetails, Transaction};

/// Share count per symbol, ordered by symbol
pub type Holdings = BTreeMap<Symbol, Quantity>;

/// A single user's trading account
#[derive(Clone)]
pub struct Account {
    owner_id: String,
    cash_balance: Money,
    /// Cost basis: cash ever deposited. Withdrawals do not reduce it.
    total_deposits: Money,
    /// Never holds a zero entry
    holdings: Holdings,
    transactions: Vec<Transaction>,
    oracle: Arc<dyn PriceOracle>,
    clock: Arc<dyn Clock>,
    config: AccountConfig,
}

/// Builder for [`Account`]
///
/// Defaults: no initial deposit, the reference [`FixedPriceOracle`], the
/// [`SystemClock`] and [`AccountConfig::default`].
pub struct AccountBuilder {
    owner_id: String,
    initial_deposit: Money,
    oracle: Option<Arc<dyn PriceOracle>>,
    clock: Option<Arc<dyn Clock>>,
    config: AccountConfig,
}

impl AccountBuilder {
    fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            initial_deposit: Decimal::ZERO,
            oracle: None,
            clock: None,
            config: AccountConfig::default(),
        }
    }

    /// Cash to open the account with; recorded as the first DEPOSIT if non-zero
    pub fn initial_deposit(mut self, amount: Money) -> Self {
        self.initial_deposit = amount;
        self
    }

    pub fn oracle(mut self, oracle: Arc<dyn PriceOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn config(mut self, config: AccountConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Account> {
        if self.owner_id.trim().is_empty() {
            return Err(AccountError::InvalidOwner);
        }
        self.config
            .validate()
            .map_err(|e| AccountError::InvalidConfig(e.to_string()))?;
        if self.initial_deposit < Decimal::ZERO {
            return Err(AccountError::InvalidAmount(self.initial_deposit));
        }

        let mut account = Account {
            owner_id: self.owner_id,
            cash_balance: Decimal::ZERO,
            total_deposits: Decimal::ZERO,
            holdings: Holdings::new(),
            transactions: Vec::new(),
            oracle: self
                .oracle
                .unwrap_or_else(|| Arc::new(FixedPriceOracle::new())),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock::new())),
            config: self.config,
        };

        let opening = round_money(self.initial_deposit, account.config.money_scale);
        if opening == Decimal::ZERO && self.initial_deposit > Decimal::ZERO {
            return Err(AccountError::InvalidAmount(self.initial_deposit));
        }
        if opening > Decimal::ZERO {
            account.apply_deposit(opening)?;
        }

        info!(
            "Account opened: owner={}, initial_deposit={}, oracle={}, clock={}",
            account.owner_id,
            opening,
            account.oracle.name(),
            account.clock.name()
        );

        Ok(account)
    }
}

impl Account {
    /// Open an account priced by `oracle`, stamped by the system clock
    pub fn new(
        owner_id: impl Into<String>,
        initial_deposit: Money,
        oracle: Arc<dyn PriceOracle>,
    ) -> Result<Self> {
        Self::builder(owner_id)
            .initial_deposit(initial_deposit)
            .oracle(oracle)
            .build()
    }

    pub fn builder(owner_id: impl Into<String>) -> AccountBuilder {
        AccountBuilder::new(owner_id)
    }

    // ========== Commands ==========

    /// Add cash. The amount is truncated to the money scale first and must
    /// still be positive.
    pub fn deposit(&mut self, amount: Money) -> Result<Transaction> {
        let result = self
            .positive_amount(amount)
            .and_then(|amount| self.apply_deposit(amount));
        self.log_outcome("deposit", result)
    }

    /// Take cash out. Does not reduce total deposits.
    pub fn withdraw(&mut self, amount: Money) -> Result<Transaction> {
        let result = self.try_withdraw(amount);
        self.log_outcome("withdraw", result)
    }

    /// Buy `quantity` shares of `symbol` at the oracle's current price
    pub fn buy_shares(
        &mut self,
        symbol: impl Into<Symbol>,
        quantity: Quantity,
    ) -> Result<Transaction> {
        let result = self.try_buy(symbol.into(), quantity);
        self.log_outcome("buy", result)
    }

    /// Sell `quantity` held shares of `symbol` at the oracle's current price
    pub fn sell_shares(
        &mut self,
        symbol: impl Into<Symbol>,
        quantity: Quantity,
    ) -> Result<Transaction> {
        let result = self.try_sell(symbol.into(), quantity);
        self.log_outcome("sell", result)
    }

    fn apply_deposit(&mut self, amount: Money) -> Result<Transaction> {
        let cash = checked(self.cash_balance.checked_add(amount), "cash balance")?;
        let deposits = checked(self.total_deposits.checked_add(amount), "total deposits")?;

        self.cash_balance = cash;
        self.total_deposits = deposits;
        Ok(self.commit(TransactionKind::Deposit, amount, None))
    }

    fn try_withdraw(&mut self, amount: Money) -> Result<Transaction> {
        let amount = self.positive_amount(amount)?;
        if amount > self.cash_balance {
            return Err(AccountError::InsufficientFunds {
                required: amount,
                available: self.cash_balance,
            });
        }

        self.cash_balance -= amount;
        Ok(self.commit(TransactionKind::Withdraw, amount, None))
    }

    fn try_buy(&mut self, symbol: Symbol, quantity: Quantity) -> Result<Transaction> {
        validate_quantity(quantity)?;

        let price = self.quote(&symbol)?;
        let cost = self.trade_value(price, quantity)?;
        if cost > self.cash_balance {
            return Err(AccountError::InsufficientFunds {
                required: cost,
                available: self.cash_balance,
            });
        }

        let held = self.quantity(&symbol);
        let new_held = held
            .checked_add(quantity)
            .ok_or(AccountError::Overflow("holdings"))?;

        self.cash_balance -= cost;
        self.holdings.insert(symbol.clone(), new_held);
        Ok(self.commit(
            TransactionKind::Buy,
            cost,
            Some(TradeDetails {
                symbol,
                quantity,
                share_price: price,
            }),
        ))
    }

    fn try_sell(&mut self, symbol: Symbol, quantity: Quantity) -> Result<Transaction> {
        validate_quantity(quantity)?;

        let held = self.quantity(&symbol);
        if quantity > held {
            return Err(AccountError::InsufficientShares {
                symbol,
                requested: quantity,
                held,
            });
        }

        let price = self.quote(&symbol)?;
        let proceeds = self.trade_value(price, quantity)?;
        let cash = checked(self.cash_balance.checked_add(proceeds), "cash balance")?;

        self.cash_balance = cash;
        let remaining = held - quantity;
        if remaining == 0 {
            self.holdings.remove(&symbol);
        } else {
            self.holdings.insert(symbol.clone(), remaining);
        }
        Ok(self.commit(
            TransactionKind::Sell,
            proceeds,
            Some(TradeDetails {
                symbol,
                quantity,
                share_price: price,
            }),
        ))
    }

    /// Append a transaction for a mutation that has already been applied
    fn commit(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        trade: Option<TradeDetails>,
    ) -> Transaction {
        // History order is chronological even if the clock steps backwards
        let now = self.clock.now();
        let timestamp = match self.transactions.last() {
            Some(last) if last.timestamp() > now => last.timestamp(),
            _ => now,
        };

        let sequence = self.transactions.len() as u64 + 1;
        let transaction = Transaction::new(sequence, timestamp, kind, amount, trade);
        self.transactions.push(transaction.clone());
        transaction
    }

    fn log_outcome(&self, operation: &str, result: Result<Transaction>) -> Result<Transaction> {
        match &result {
            Ok(tx) => debug!(
                "Committed {}: owner={}, {}, cash={}",
                operation, self.owner_id, tx, self.cash_balance
            ),
            Err(e) => warn!(
                "Rejected {}: owner={}, reason={}",
                operation, self.owner_id, e
            ),
        }
        result
    }

    // ========== Validation & arithmetic ==========

    /// Quantize a cash amount and require it to be strictly positive
    fn positive_amount(&self, amount: Money) -> Result<Money> {
        let quantized = round_money(amount, self.config.money_scale);
        if quantized <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount(amount));
        }
        Ok(quantized)
    }

    /// Oracle price for `symbol`; non-positive quotes are rejected
    fn quote(&self, symbol: &Symbol) -> Result<Price> {
        let price = self.oracle.price(symbol)?;
        if price <= Decimal::ZERO {
            return Err(AccountError::InvalidPrice {
                symbol: symbol.clone(),
                price,
            });
        }
        Ok(price)
    }

    /// Cash moved by a trade: price x quantity, quantized once
    fn trade_value(&self, price: Price, quantity: Quantity) -> Result<Money> {
        let value = checked(price.checked_mul(Decimal::from(quantity)), "trade value")?;
        Ok(round_money(value, self.config.money_scale))
    }

    // ========== Queries ==========

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn cash_balance(&self) -> Money {
        self.cash_balance
    }

    pub fn total_deposits(&self) -> Money {
        self.total_deposits
    }

    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    /// Shares held of `symbol` (0 if none)
    pub fn quantity(&self, symbol: &Symbol) -> Quantity {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Snapshot of current holdings; changing it never affects the account
    pub fn holdings(&self) -> Holdings {
        self.holdings
            .iter()
            .filter(|(_, quantity)| **quantity > 0)
            .map(|(symbol, quantity)| (symbol.clone(), *quantity))
            .collect()
    }

    /// Cash plus the current market value of every holding.
    ///
    /// Strict: if any held symbol cannot be priced the whole valuation fails.
    pub fn portfolio_value(&self) -> Result<Money> {
        let positions = self.value_positions()?;
        self.total_value(&positions)
    }

    /// Portfolio value minus total deposits. Positive is a gain.
    pub fn profit_or_loss(&self) -> Result<Money> {
        Ok(self.portfolio_value()? - self.total_deposits)
    }

    /// Snapshot of the ledger, oldest first
    pub fn transaction_history(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Full valuation report, priced once per held symbol
    pub fn summary(&self) -> Result<AccountSummary> {
        let positions = self.value_positions()?;
        let portfolio_value = self.total_value(&positions)?;

        Ok(AccountSummary {
            owner_id: self.owner_id.clone(),
            cash_balance: self.cash_balance,
            total_deposits: self.total_deposits,
            portfolio_value,
            profit_or_loss: portfolio_value - self.total_deposits,
            positions,
            transaction_count: self.transactions.len(),
            as_of: self.clock.now(),
        })
    }

    fn value_positions(&self) -> Result<Vec<PositionValue>> {
        self.holdings
            .iter()
            .map(|(symbol, &quantity)| {
                let price = self.quote(symbol)?;
                let market_value =
                    checked(price.checked_mul(Decimal::from(quantity)), "market value")?;
                Ok(PositionValue {
                    symbol: symbol.clone(),
                    quantity,
                    price,
                    market_value,
                })
            })
            .collect()
    }

    fn total_value(&self, positions: &[PositionValue]) -> Result<Money> {
        let holdings_value = positions
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.market_value));
        let holdings_value = checked(holdings_value, "holdings value")?;

        checked(
            self.cash_balance
                .checked_add(round_money(holdings_value, self.config.money_scale)),
            "portfolio value",
        )
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("owner_id", &self.owner_id)
            .field("cash_balance", &self.cash_balance)
            .field("total_deposits", &self.total_deposits)
            .field("holdings", &self.holdings)
            .field("transactions", &self.transactions.len())
            .field("oracle", &self.oracle.name())
            .field("clock", &self.clock.name())
            .field("config", &self.config)
            .finish()
    }
}

fn validate_quantity(quantity: Quantity) -> Result<()> {
    if quantity == 0 {
        return Err(AccountError::InvalidQuantity(quantity));
    }
    Ok(())
}

fn checked(value: Option<Decimal>, what: &'static str) -> Result<Decimal> {
    value.ok_or(AccountError::Overflow(what))
}
