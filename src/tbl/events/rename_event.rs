#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEvent {
    pub account_number: String,
    pub pin: String,
    pub new_name: String,
}
