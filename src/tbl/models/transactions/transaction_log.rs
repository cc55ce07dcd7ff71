use super::Transaction;

/// Represents a WORM (Write Once, Read Many) history of an account's transactions, in the order
/// they were recorded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionLog {
    history: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction, returning its index in the log
    pub(crate) fn append(&mut self, transaction: Transaction) -> usize {
        let index = self.history.len();

        self.history.push(transaction);

        index
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
