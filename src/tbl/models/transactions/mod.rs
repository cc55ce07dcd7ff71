mod transaction;
mod transaction_log;
mod r#type;

pub use transaction::Transaction;
pub use transaction_log::TransactionLog;
pub use r#type::TransactionType;
