use std::fmt;

/// Plaintext shared secret gating every account operation
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub fn new(pin: impl Into<String>) -> Self {
        return Self(pin.into());
    }

    /// Exact, case-sensitive comparison
    pub fn matches(&self, candidate: &str) -> bool {
        return self.0.as_bytes() == candidate.as_bytes();
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "Pin(****)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches() {
        let pin = Pin::new("12ab");

        assert!(pin.matches("12ab"));
        assert!(!pin.matches("12AB"));
        assert!(!pin.matches("12ab "));
        assert!(!pin.matches(""));
    }

    #[test]
    fn debug_is_redacted() {
        let pin = Pin::new("1234");

        assert!(!format!("{pin:?}").contains("1234"));
    }
}
