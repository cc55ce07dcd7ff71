use crate::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAccountEvent {
    pub name: String,
    pub account_number: String,
    pub pin: String,
    pub opening_balance: Money,
}
