use super::{Passbook, Pin, Transaction, TransactionLog, TransactionType};

use crate::ids::AccountNumber;
use crate::{LedgerError, LedgerResult, Money};

/// A named ledger entry. All mutation goes through PIN-gated operations, and every failed
/// operation leaves the account untouched.
#[derive(Debug)]
pub struct Account {
    name: String,
    account_number: AccountNumber,
    pin: Pin,
    opening_balance: Money,
    balance: Money,
    transactions: TransactionLog,
}

impl Account {
    pub(crate) fn new(
        name: impl Into<String>,
        account_number: AccountNumber,
        pin: Pin,
        opening_balance: Money,
    ) -> LedgerResult<Self> {
        if opening_balance.is_negative() {
            Err(LedgerError::InvalidAmount(opening_balance))?
        }

        Ok(Self {
            name: name.into(),
            account_number,
            pin,
            opening_balance,
            balance: opening_balance,
            transactions: TransactionLog::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn opening_balance(&self) -> Money {
        self.opening_balance
    }

    pub fn credit(&mut self, amount: Money, pin: &str) -> LedgerResult {
        self.authorize(pin)?;
        validate_amount(amount)?;

        let balance = self.balance.checked_add(&amount)?;

        self.record(balance, TransactionType::Credit, amount);

        Ok(())
    }

    pub fn debit(&mut self, amount: Money, pin: &str) -> LedgerResult {
        self.authorize(pin)?;
        validate_amount(amount)?;

        if amount > self.balance {
            Err(LedgerError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            })?
        }

        let balance = self.balance.checked_sub(&amount)?;

        self.record(balance, TransactionType::Debit, amount);

        Ok(())
    }

    pub fn check_balance(&self, pin: &str) -> LedgerResult<Money> {
        self.authorize(pin)?;

        Ok(self.balance)
    }

    /// PIN changes are not part of the transaction history
    pub fn change_pin(&mut self, current_pin: &str, new_pin: impl Into<String>) -> LedgerResult {
        self.authorize(current_pin)?;

        self.pin = Pin::new(new_pin);

        log::debug!("Changed PIN for account {}", self.account_number);

        Ok(())
    }

    pub fn rename(&mut self, new_name: impl Into<String>, pin: &str) -> LedgerResult {
        self.authorize(pin)?;

        self.name = new_name.into();

        log::debug!("Renamed account {} to {:?}", self.account_number, self.name);

        Ok(())
    }

    pub fn list_transactions(&self, pin: &str) -> LedgerResult<&[Transaction]> {
        self.authorize(pin)?;

        Ok(self.transactions.as_slice())
    }

    pub fn print_passbook(&self, pin: &str) -> LedgerResult<Passbook> {
        self.authorize(pin)?;

        Ok(Passbook {
            account_number: self.account_number.clone(),
            name: self.name.clone(),
            opening_balance: self.opening_balance,
            balance: self.balance,
            transactions: self.transactions.as_slice().to_vec(),
        })
    }

    fn authorize(&self, pin: &str) -> LedgerResult {
        if !self.pin.matches(pin) {
            log::debug!("PIN mismatch for account {}", self.account_number);
            Err(LedgerError::AuthorizationFailed)?
        }

        Ok(())
    }

    /// Commits a new balance together with the transaction that produced it
    fn record(&mut self, balance: Money, transaction_type: TransactionType, amount: Money) {
        self.balance = balance;

        let index = self
            .transactions
            .append(Transaction::new(transaction_type, amount));

        log::debug!(
            "Recorded {transaction_type} of {amount} at index {index} for account {}, balance is now {}",
            self.account_number,
            self.balance
        );
    }
}

fn validate_amount(amount: Money) -> LedgerResult {
    if !amount.is_positive() {
        Err(LedgerError::InvalidAmount(amount))?
    }

    Ok(())
}
