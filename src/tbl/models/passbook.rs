use super::Transaction;

use crate::ids::AccountNumber;
use crate::Money;

/// Read-only view of an account's identity and full transaction history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passbook {
    pub account_number: AccountNumber,
    pub name: String,
    pub opening_balance: Money,
    pub balance: Money,
    pub transactions: Vec<Transaction>,
}
