use crate::events::{
    ChangePinEvent, CheckBalanceEvent, CreditEvent, DebitEvent, OpenAccountEvent,
    PrintPassbookEvent, RenameEvent, TellerEvent,
};
use crate::{Money, MoneyError};

use csv::StringRecord;

use serde::Deserialize;

use thiserror::Error;

/// Represents an input row that a string would deserialize into. Fields other than `type` and
/// `amount` are kept byte for byte.
#[derive(Deserialize, Debug, Clone)]
pub struct InputEvent {
    #[serde(rename = "type")]
    pub typ: String,

    pub account: String,
    pub pin: String,
    pub amount: Option<String>,
    pub name: Option<String>,
    pub new_pin: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEventType {
    Open,
    Credit,
    Debit,
    Balance,
    ChangePin,
    Passbook,
    Rename,
}

impl InputEventType {
    pub fn parse(command: &str) -> Result<Self, InputParseError> {
        match command.trim() {
            "open" => Ok(Self::Open),
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            "balance" => Ok(Self::Balance),
            "change_pin" => Ok(Self::ChangePin),
            "passbook" => Ok(Self::Passbook),
            "rename" => Ok(Self::Rename),
            other => Err(InputParseError::UnknownCommand(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Balance => "balance",
            Self::ChangePin => "change_pin",
            Self::Passbook => "passbook",
            Self::Rename => "rename",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    #[error("Error parsing input event: {0} value missing from {1}")]
    MissingField(&'static str, &'static str),

    #[error("Error parsing input event: invalid amount: {0}")]
    InvalidAmount(#[from] MoneyError),

    #[error("Error parsing input event: unknown command {0:?}")]
    UnknownCommand(String),

    #[error("Error parsing input event: malformed row: {0}")]
    Malformed(String),
}

impl InputEvent {
    /// Rows may be shorter than the header; missing optional cells read as empty
    pub fn from_record(
        record: &StringRecord,
        headers: &StringRecord,
    ) -> Result<Self, InputParseError> {
        record
            .deserialize(Some(headers))
            .map_err(|e| InputParseError::Malformed(e.to_string()))
    }

    pub fn event_type(&self) -> Result<InputEventType, InputParseError> {
        InputEventType::parse(&self.typ)
    }

    pub fn parse_event(self) -> Result<TellerEvent, InputParseError> {
        let event_type = self.event_type()?;
        let typ = event_type.as_str();

        let event = match event_type {
            InputEventType::Open => TellerEvent::OpenAccount(OpenAccountEvent {
                name: required("name", typ, self.name)?,
                opening_balance: parse_amount(typ, self.amount)?,
                account_number: self.account,
                pin: self.pin,
            }),
            InputEventType::Credit => TellerEvent::Credit(CreditEvent {
                amount: parse_amount(typ, self.amount)?,
                account_number: self.account,
                pin: self.pin,
            }),
            InputEventType::Debit => TellerEvent::Debit(DebitEvent {
                amount: parse_amount(typ, self.amount)?,
                account_number: self.account,
                pin: self.pin,
            }),
            InputEventType::Balance => TellerEvent::CheckBalance(CheckBalanceEvent {
                account_number: self.account,
                pin: self.pin,
            }),
            InputEventType::ChangePin => TellerEvent::ChangePin(ChangePinEvent {
                new_pin: required("new_pin", typ, self.new_pin)?,
                account_number: self.account,
                current_pin: self.pin,
            }),
            InputEventType::Passbook => TellerEvent::PrintPassbook(PrintPassbookEvent {
                account_number: self.account,
                pin: self.pin,
            }),
            InputEventType::Rename => TellerEvent::Rename(RenameEvent {
                new_name: required("name", typ, self.name)?,
                account_number: self.account,
                pin: self.pin,
            }),
        };

        Ok(event)
    }
}

/// Empty cells count as missing
fn required(
    field: &'static str,
    typ: &'static str,
    value: Option<String>,
) -> Result<String, InputParseError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(InputParseError::MissingField(field, typ))
}

fn parse_amount(typ: &'static str, amount: Option<String>) -> Result<Money, InputParseError> {
    let amount = required("amount", typ, amount)?;

    Ok(Money::parse(&amount)?)
}
