#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePinEvent {
    pub account_number: String,
    pub current_pin: String,
    pub new_pin: String,
}
