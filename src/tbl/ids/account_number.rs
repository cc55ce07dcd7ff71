use std::borrow::Borrow;
use std::fmt;

/// Unique, immutable key of an account within a registry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(number: impl Into<String>) -> Self {
        return Self(number.into());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl Borrow<str> for AccountNumber {
    fn borrow(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
