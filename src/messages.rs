use tbl::input::{InputEventType, InputParseError};
use tbl::models::Passbook;
use tbl::services::TellerOutcome;
use tbl::LedgerError;

use std::fmt::Write;

const INVALID_CREDENTIALS: &str = "Invalid account number or PIN. Please try again.";
const INVALID_CURRENT_PIN: &str = "Invalid account number or current PIN. Please try again.";
pub const UNREADABLE_REQUEST: &str = "Unreadable request. Please try again.";

pub fn describe_outcome(outcome: &TellerOutcome) -> String {
    match outcome {
        TellerOutcome::AccountOpened(_) => "Account created successfully!".to_string(),
        TellerOutcome::Credited => "Amount credited successfully!".to_string(),
        TellerOutcome::Debited => "Amount debited successfully!".to_string(),
        TellerOutcome::Balance(balance) => format!("Balance: ${balance}"),
        TellerOutcome::PinChanged => "PIN changed successfully!".to_string(),
        TellerOutcome::Renamed => "Account renamed successfully!".to_string(),
        TellerOutcome::Passbook(passbook) => render_passbook(passbook),
    }
}

/// Unknown accounts and wrong PINs share one message
pub fn describe_error(error: &LedgerError, typ: InputEventType) -> String {
    match error {
        LedgerError::AuthorizationFailed | LedgerError::NotFound(_) => match typ {
            InputEventType::ChangePin => INVALID_CURRENT_PIN.to_string(),
            _ => INVALID_CREDENTIALS.to_string(),
        },
        LedgerError::InsufficientBalance { .. } => "Insufficient balance.".to_string(),
        LedgerError::InvalidAmount(_) => match typ {
            InputEventType::Open => {
                "Invalid opening balance. Please enter a non-negative value.".to_string()
            }
            _ => "Invalid amount. Please enter a positive value.".to_string(),
        },
        LedgerError::DuplicateAccount(account_number) => {
            format!("Account number {account_number} already exists.")
        }
        LedgerError::Money(_) => "Amount out of range.".to_string(),
    }
}

pub fn describe_input_error(error: &InputParseError) -> String {
    match error {
        InputParseError::MissingField(field, _) => format!("Missing {field}. Please try again."),
        InputParseError::InvalidAmount(_) => {
            "Invalid amount format. Please enter a number.".to_string()
        }
        InputParseError::UnknownCommand(command) => {
            format!("Unknown command: {command}. Please try again.")
        }
        InputParseError::Malformed(_) => "Malformed request. Please try again.".to_string(),
    }
}

pub fn render_passbook(passbook: &Passbook) -> String {
    let mut text = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(text, "Account Number: {}", passbook.account_number);
    let _ = writeln!(text, "Name: {}", passbook.name);
    let _ = writeln!(text, "Opening Balance: ${}", passbook.opening_balance);
    let _ = writeln!(text, "Current Balance: ${}", passbook.balance);
    let _ = writeln!(text);
    let _ = write!(text, "Transactions:");

    for transaction in passbook.transactions.iter() {
        let _ = write!(
            text,
            "\n{} - {}: ${}",
            transaction.timestamp().format("%Y-%m-%d %H:%M:%S UTC"),
            transaction.transaction_type(),
            transaction.amount()
        );
    }

    text
}

#[cfg(test)]
mod tests {
    use tbl::events::{CreditEvent, OpenAccountEvent, PrintPassbookEvent, TellerEvent};
    use tbl::ids::AccountNumber;
    use tbl::Money;

    use super::*;

    fn build_passbook() -> Passbook {
        let mut teller = tbl::build_teller();

        teller
            .process_event(TellerEvent::OpenAccount(OpenAccountEvent {
                name: "Alice".to_string(),
                account_number: "AC100".to_string(),
                pin: "1234".to_string(),
                opening_balance: Money::from_cents(10000),
            }))
            .unwrap();

        teller
            .process_event(TellerEvent::Credit(CreditEvent {
                account_number: "AC100".to_string(),
                pin: "1234".to_string(),
                amount: Money::from_cents(5000),
            }))
            .unwrap();

        match teller.process_event(TellerEvent::PrintPassbook(PrintPassbookEvent {
            account_number: "AC100".to_string(),
            pin: "1234".to_string(),
        })) {
            Ok(TellerOutcome::Passbook(passbook)) => passbook,
            other => panic!("Expected a passbook, got: {other:?}"),
        }
    }

    #[test]
    fn render_passbook_lists_transactions() {
        let text = render_passbook(&build_passbook());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            &lines[..6],
            &[
                "Account Number: AC100",
                "Name: Alice",
                "Opening Balance: $100.00",
                "Current Balance: $150.00",
                "",
                "Transactions:",
            ]
        );
        assert_eq!(lines.len(), 7);
        assert!(lines[6].ends_with(" UTC - Credit: $50.00"));
    }

    #[test]
    fn describe_error_hides_unknown_accounts() {
        assert_eq!(
            describe_error(
                &LedgerError::NotFound(AccountNumber::new("UNKNOWN")),
                InputEventType::Credit
            ),
            describe_error(&LedgerError::AuthorizationFailed, InputEventType::Credit)
        );
        assert_eq!(
            describe_error(&LedgerError::AuthorizationFailed, InputEventType::ChangePin),
            INVALID_CURRENT_PIN
        );
    }

    #[test]
    fn describe_input_error_names_unknown_commands() {
        assert_eq!(
            describe_input_error(&InputParseError::UnknownCommand("withdraw".to_string())),
            "Unknown command: withdraw. Please try again."
        );
    }

    #[test]
    fn describe_outcome_balance() {
        assert_eq!(
            describe_outcome(&TellerOutcome::Balance(Money::from_cents(15000))),
            "Balance: $150.00"
        );
    }
}
