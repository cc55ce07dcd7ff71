pub mod events;
pub mod ids;
pub mod input;
pub mod models;
pub mod services;
mod error;
mod money;
mod report;
mod result;

pub use error::LedgerError;
pub use money::{Money, MoneyError};
pub use report::{ReportStatus, TellerReport};
pub use result::{LedgerResult, Result};

pub fn build_teller() -> services::Teller {
    let registry = services::AccountRegistry::new();
    let teller = services::Teller::new(registry);

    return teller;
}
