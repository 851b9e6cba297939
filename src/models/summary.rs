use serde::Serialize;

/// Joined per-agent output row, with durations already formatted as
/// HH:MM:SS. Recomputed fresh on every `generate` run, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AgentSummary {
    pub employee_id: String,
    pub agent_name: String,
    pub login_time: String,
    pub net_login: String,
    pub total_break: String,
    pub total_meeting: String,
    pub total_matured: u64,
    pub ib_matured: u64,
    pub ob_matured: u64,
    pub talk_time: String,
    pub aht: String,
}
