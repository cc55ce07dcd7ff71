mod account;
mod passbook;
mod pin;
mod transactions;

pub use account::Account;
pub use passbook::Passbook;
pub use pin::Pin;
pub use transactions::{Transaction, TransactionLog, TransactionType};
