mod account_registry;
mod teller;

pub use account_registry::AccountRegistry;
pub use teller::{Teller, TellerOutcome};
