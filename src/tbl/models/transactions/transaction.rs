use super::TransactionType;

use crate::Money;

use chrono::{DateTime, Utc};

/// Immutable record of a single movement of funds on an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    transaction_type: TransactionType,
    amount: Money,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Records a movement at the current instant
    pub(crate) fn new(transaction_type: TransactionType, amount: Money) -> Self {
        return Self {
            transaction_type,
            amount,
            timestamp: Utc::now(),
        };
    }

    pub fn transaction_type(&self) -> TransactionType {
        return self.transaction_type;
    }

    pub fn amount(&self) -> Money {
        return self.amount;
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        return self.timestamp;
    }
}
