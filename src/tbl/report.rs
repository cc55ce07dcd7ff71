use serde::{Deserialize, Serialize};

/// One output row per teller request; `line` is the request's line in the script file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TellerReport {
    pub line: u64,
    pub command: String,
    pub account: String,
    pub status: ReportStatus,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Ok,
    Error,
}
