/// Terminal statuses that count a call as matured (completed or handed
/// off). The `"1"` entry covers exports that emit a numeric flag
/// instead of a status label.
pub const MATURED_STATUSES: [&str; 3] = ["CALLMATURED", "TRANSFER", "1"];

/// Campaign tag marking an inbound call. Every other matured call is
/// counted as outbound by complement.
pub const INBOUND_CAMPAIGN: &str = "CSRINBOUND";

/// One normalized row of the CDR export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// Canonical agent/employee id, same normalization as the agent side.
    pub agent_id: String,
    /// Campaign / call-direction tag, upper-cased and trimmed.
    pub campaign: String,
    /// Outcome status, upper-cased and trimmed.
    pub status: String,
}

impl CallRecord {
    pub fn is_matured(&self) -> bool {
        MATURED_STATUSES.contains(&self.status.as_str())
    }

    pub fn is_inbound(&self) -> bool {
        self.campaign == INBOUND_CAMPAIGN
    }
}
