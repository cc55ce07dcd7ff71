use crate::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditEvent {
    pub account_number: String,
    pub pin: String,
    pub amount: Money,
}
