#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintPassbookEvent {
    pub account_number: String,
    pub pin: String,
}
