use crate::LedgerError;

/// Convenience type to make error mapping cleaner
pub type Result<T = ()> = anyhow::Result<T>;

/// Result of a ledger operation; failures never leave partial state behind
pub type LedgerResult<T = ()> = std::result::Result<T, LedgerError>;
