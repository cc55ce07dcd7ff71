use crate::ids::AccountNumber;
use crate::{Money, MoneyError};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Wrong PIN, or (when surfaced by the teller) an unknown account number
    #[error("Authorization failed")]
    AuthorizationFailed,

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: Money, available: Money },

    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    #[error("Account not found: {0}")]
    NotFound(AccountNumber),

    #[error("Account number already exists: {0}")]
    DuplicateAccount(AccountNumber),

    #[error(transparent)]
    Money(#[from] MoneyError),
}
