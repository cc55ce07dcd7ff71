mod change_pin_event;
mod check_balance_event;
mod credit_event;
mod debit_event;
mod open_account_event;
mod print_passbook_event;
mod rename_event;

pub use change_pin_event::ChangePinEvent;
pub use check_balance_event::CheckBalanceEvent;
pub use credit_event::CreditEvent;
pub use debit_event::DebitEvent;
pub use open_account_event::OpenAccountEvent;
pub use print_passbook_event::PrintPassbookEvent;
pub use rename_event::RenameEvent;

/// Typed teller request, forcing correct handling through the type-system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TellerEvent {
    OpenAccount(OpenAccountEvent),
    Credit(CreditEvent),
    Debit(DebitEvent),
    CheckBalance(CheckBalanceEvent),
    ChangePin(ChangePinEvent),
    PrintPassbook(PrintPassbookEvent),
    Rename(RenameEvent),
}

impl TellerEvent {
    /// Account number the request is addressed to
    pub fn account_number(&self) -> &str {
        match self {
            Self::OpenAccount(event) => &event.account_number,
            Self::Credit(event) => &event.account_number,
            Self::Debit(event) => &event.account_number,
            Self::CheckBalance(event) => &event.account_number,
            Self::ChangePin(event) => &event.account_number,
            Self::PrintPassbook(event) => &event.account_number,
            Self::Rename(event) => &event.account_number,
        }
    }
}
