use crate::ids::AccountNumber;
use crate::models::{Account, Pin};
use crate::{LedgerError, LedgerResult, Money};

use std::collections::HashMap;

/// Owns every account opened during the session, indexed by account number and kept in
/// creation order
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
    index: HashMap<AccountNumber, usize>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new account with an empty transaction log. Account numbers are unique, and
    /// the opening balance may not be negative.
    pub fn create_account(
        &mut self,
        name: impl Into<String>,
        account_number: impl Into<String>,
        pin: impl Into<String>,
        opening_balance: Money,
    ) -> LedgerResult<&mut Account> {
        let account_number = AccountNumber::new(account_number);

        if self.index.contains_key(&account_number) {
            Err(LedgerError::DuplicateAccount(account_number.clone()))?
        }

        let account = Account::new(name, account_number.clone(), Pin::new(pin), opening_balance)?;

        let position = self.accounts.len();
        self.accounts.push(account);
        self.index.insert(account_number, position);

        log::debug!("Opened account at position {position}");

        Ok(&mut self.accounts[position])
    }

    pub fn find_account(&self, account_number: &str) -> Option<&Account> {
        self.index
            .get(account_number)
            .map(|position| &self.accounts[*position])
    }

    pub fn find_account_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        let position = *self.index.get(account_number)?;

        self.accounts.get_mut(position)
    }

    /// Like `find_account`, but reports a miss as `NotFound`
    pub fn get(&self, account_number: &str) -> LedgerResult<&Account> {
        self.find_account(account_number)
            .ok_or_else(|| LedgerError::NotFound(AccountNumber::new(account_number)))
    }

    /// Like `find_account_mut`, but reports a miss as `NotFound`
    pub fn get_mut(&mut self, account_number: &str) -> LedgerResult<&mut Account> {
        self.find_account_mut(account_number)
            .ok_or_else(|| LedgerError::NotFound(AccountNumber::new(account_number)))
    }

    /// Accounts in the order they were opened
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_ACCOUNT: &str = "AC100";
    const OTHER_ACCOUNT: &str = "AC200";

    const SOME_PIN: &str = "1234";

    #[test]
    fn create_account() {
        let mut registry = AccountRegistry::new();
        assert!(registry.is_empty());

        let account = registry
            .create_account("Alice", SOME_ACCOUNT, SOME_PIN, Money::from_cents(10000))
            .unwrap();

        assert_eq!(account.name(), "Alice");
        assert_eq!(account.account_number().as_str(), SOME_ACCOUNT);
        assert_eq!(account.opening_balance(), Money::from_cents(10000));
        assert!(account.list_transactions(SOME_PIN).unwrap().is_empty());

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn create_account_rejects_duplicates() {
        let mut registry = AccountRegistry::new();

        registry
            .create_account("Alice", SOME_ACCOUNT, SOME_PIN, Money::from_cents(10000))
            .unwrap();

        let res = registry.create_account("Bob", SOME_ACCOUNT, "9999", Money::ZERO);

        assert_eq!(
            res.unwrap_err(),
            LedgerError::DuplicateAccount(AccountNumber::new(SOME_ACCOUNT))
        );

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find_account(SOME_ACCOUNT).unwrap().name(), "Alice");
    }

    #[test]
    fn create_account_rejects_negative_opening_balance() {
        let mut registry = AccountRegistry::new();

        let res = registry.create_account("Alice", SOME_ACCOUNT, SOME_PIN, Money::from_cents(-100));

        assert_eq!(
            res.unwrap_err(),
            LedgerError::InvalidAmount(Money::from_cents(-100))
        );
        assert!(registry.is_empty());
        assert!(registry.find_account(SOME_ACCOUNT).is_none());
    }

    #[test]
    fn find_account() {
        let mut registry = AccountRegistry::new();

        registry
            .create_account("Alice", SOME_ACCOUNT, SOME_PIN, Money::ZERO)
            .unwrap();
        registry
            .create_account("Bob", OTHER_ACCOUNT, SOME_PIN, Money::ZERO)
            .unwrap();

        assert_eq!(registry.find_account(OTHER_ACCOUNT).unwrap().name(), "Bob");
        assert!(registry.find_account("UNKNOWN").is_none());
        assert!(registry.find_account("ac100").is_none());
    }

    #[test]
    fn mutations_are_visible_to_later_lookups() {
        let mut registry = AccountRegistry::new();

        registry
            .create_account("Alice", SOME_ACCOUNT, SOME_PIN, Money::from_cents(10000))
            .unwrap();

        registry
            .find_account_mut(SOME_ACCOUNT)
            .unwrap()
            .credit(Money::from_cents(5000), SOME_PIN)
            .unwrap();

        let account = registry.find_account(SOME_ACCOUNT).unwrap();

        assert_eq!(account.check_balance(SOME_PIN), Ok(Money::from_cents(15000)));
        assert_eq!(account.list_transactions(SOME_PIN).unwrap().len(), 1);
    }

    #[test]
    fn get() {
        let mut registry = AccountRegistry::new();

        registry
            .create_account("Alice", SOME_ACCOUNT, SOME_PIN, Money::ZERO)
            .unwrap();

        assert_eq!(registry.get(SOME_ACCOUNT).unwrap().name(), "Alice");
        assert_eq!(
            registry.get("UNKNOWN").unwrap_err(),
            LedgerError::NotFound(AccountNumber::new("UNKNOWN"))
        );
    }

    #[test]
    fn get_mut() {
        let mut registry = AccountRegistry::new();

        assert_eq!(
            registry.get_mut("UNKNOWN").unwrap_err(),
            LedgerError::NotFound(AccountNumber::new("UNKNOWN"))
        );
    }

    #[test]
    fn accounts_in_creation_order() {
        let mut registry = AccountRegistry::new();

        for number in ["C3", "A1", "B2"] {
            registry
                .create_account("Someone", number, SOME_PIN, Money::ZERO)
                .unwrap();
        }

        let numbers: Vec<&str> = registry
            .accounts()
            .map(|account| account.account_number().as_str())
            .collect();

        assert_eq!(numbers, vec!["C3", "A1", "B2"]);
    }
}
