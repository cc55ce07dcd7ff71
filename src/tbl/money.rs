use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use thiserror::Error;

const MAX_DECIMAL_PLACES: u32 = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point monetary amount, at most two decimal places
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn from_cents(cents: i64) -> Self {
        return Self(Decimal::new(cents, MAX_DECIMAL_PLACES));
    }

    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        if trimmed.is_empty() {
            return Err(MoneyError::Parse("Empty amount", string.to_string()));
        }

        let value = Decimal::from_str(trimmed)
            .map_err(|_| MoneyError::Parse("Not a decimal number", string.to_string()))?;

        if value.scale() > MAX_DECIMAL_PLACES {
            return Err(MoneyError::Parse("Too many decimal places", string.to_string()));
        }

        return Ok(Self(value));
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > Decimal::ZERO;
    }

    pub fn is_negative(&self) -> bool {
        return self.0 < Decimal::ZERO;
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, MoneyError> {
        return self
            .0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow("add", *self, *other));
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, MoneyError> {
        return self
            .0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(MoneyError::Underflow("sub", *self, *other));
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        return Self(value);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{:.2}", self.0);
    }
}
