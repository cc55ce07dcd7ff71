#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckBalanceEvent {
    pub account_number: String,
    pub pin: String,
}
