use super::AccountRegistry;

use crate::events::{
    ChangePinEvent, CheckBalanceEvent, CreditEvent, DebitEvent, OpenAccountEvent,
    PrintPassbookEvent, RenameEvent, TellerEvent,
};
use crate::ids::AccountNumber;
use crate::models::{Account, Passbook};
use crate::{LedgerError, LedgerResult, Money};

/// Successful result of a teller request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TellerOutcome {
    AccountOpened(AccountNumber),
    Credited,
    Debited,
    Balance(Money),
    PinChanged,
    Renamed,
    Passbook(Passbook),
}

/// Front desk over an `AccountRegistry`: addresses accounts by number and never reveals
/// whether a number exists.
pub struct Teller {
    registry: AccountRegistry,
}

impl Teller {
    pub fn new(registry: AccountRegistry) -> Self {
        return Self { registry };
    }

    pub fn process_event(&mut self, event: TellerEvent) -> LedgerResult<TellerOutcome> {
        log::debug!(
            "Processing teller event for account {:?}",
            event.account_number()
        );

        let outcome = match event {
            TellerEvent::OpenAccount(event) => self.process_open_account_event(event)?,

            TellerEvent::Credit(event) => self.process_credit_event(event)?,

            TellerEvent::Debit(event) => self.process_debit_event(event)?,

            TellerEvent::CheckBalance(event) => self.process_check_balance_event(event)?,

            TellerEvent::ChangePin(event) => self.process_change_pin_event(event)?,

            TellerEvent::PrintPassbook(event) => self.process_print_passbook_event(event)?,

            TellerEvent::Rename(event) => self.process_rename_event(event)?,
        };

        return Ok(outcome);
    }

    pub fn registry(&self) -> &AccountRegistry {
        return &self.registry;
    }

    fn process_open_account_event(
        &mut self,
        event: OpenAccountEvent,
    ) -> LedgerResult<TellerOutcome> {
        let account = self.registry.create_account(
            event.name,
            event.account_number,
            event.pin,
            event.opening_balance,
        )?;

        log::debug!("Successfully opened account: {account:?}");

        return Ok(TellerOutcome::AccountOpened(account.account_number().clone()));
    }

    fn process_credit_event(&mut self, event: CreditEvent) -> LedgerResult<TellerOutcome> {
        self.find_account_mut(&event.account_number)?
            .credit(event.amount, &event.pin)?;

        return Ok(TellerOutcome::Credited);
    }

    fn process_debit_event(&mut self, event: DebitEvent) -> LedgerResult<TellerOutcome> {
        self.find_account_mut(&event.account_number)?
            .debit(event.amount, &event.pin)?;

        return Ok(TellerOutcome::Debited);
    }

    fn process_check_balance_event(
        &self,
        event: CheckBalanceEvent,
    ) -> LedgerResult<TellerOutcome> {
        let balance = self
            .find_account(&event.account_number)?
            .check_balance(&event.pin)?;

        return Ok(TellerOutcome::Balance(balance));
    }

    fn process_change_pin_event(&mut self, event: ChangePinEvent) -> LedgerResult<TellerOutcome> {
        self.find_account_mut(&event.account_number)?
            .change_pin(&event.current_pin, event.new_pin)?;

        return Ok(TellerOutcome::PinChanged);
    }

    fn process_print_passbook_event(
        &self,
        event: PrintPassbookEvent,
    ) -> LedgerResult<TellerOutcome> {
        let passbook = self
            .find_account(&event.account_number)?
            .print_passbook(&event.pin)?;

        return Ok(TellerOutcome::Passbook(passbook));
    }

    fn process_rename_event(&mut self, event: RenameEvent) -> LedgerResult<TellerOutcome> {
        self.find_account_mut(&event.account_number)?
            .rename(event.new_name, &event.pin)?;

        return Ok(TellerOutcome::Renamed);
    }

    fn find_account(&self, account_number: &str) -> LedgerResult<&Account> {
        return self.registry.get(account_number).map_err(hide_unknown_account);
    }

    fn find_account_mut(&mut self, account_number: &str) -> LedgerResult<&mut Account> {
        return self
            .registry
            .get_mut(account_number)
            .map_err(hide_unknown_account);
    }
}

/// Unknown account numbers are reported exactly like a wrong PIN
fn hide_unknown_account(error: LedgerError) -> LedgerError {
    match error {
        LedgerError::NotFound(account_number) => {
            log::debug!("No account found for {account_number}");
            LedgerError::AuthorizationFailed
        }
        error => error,
    }
}
