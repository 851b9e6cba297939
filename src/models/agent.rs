/// One normalized row of the Agent Performance export.
///
/// Durations are kept in integer seconds; formatting back to HH:MM:SS
/// happens only at the presentation edge. Immutable after
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRecord {
    /// Canonical agent/employee id: trimmed, trailing `.0` stripped.
    pub id: String,
    pub name: String,
    pub login_secs: i64,
    /// Sum of all configured break-category columns.
    pub break_secs: i64,
    /// Sum of the meeting columns (meeting proper + system-down time).
    pub meeting_secs: i64,
    pub talk_secs: i64,
}

impl AgentRecord {
    /// Login minus total break. Not clamped: inconsistent source data
    /// can legitimately yield a negative value, and masking it would
    /// hide the inconsistency.
    pub fn net_login_secs(&self) -> i64 {
        self.login_secs - self.break_secs
    }
}
