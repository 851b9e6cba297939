// src/export/model.rs

use crate::models::AgentSummary;
use serde::Serialize;

/// Header names for CSV / XLSX / terminal table, in the column order
/// of the original production report.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Employee ID",
        "Agent Full Name",
        "Total Login Time",
        "Total Net Login",
        "Total Break",
        "Total Meeting",
        "Total Mature",
        "IB Mature",
        "OB Mature",
        "Total Talk Time",
        "AHT",
    ]
}

/// Flatten one summary into cells following `get_headers()` order.
pub(crate) fn summary_to_row(s: &AgentSummary) -> Vec<String> {
    vec![
        s.employee_id.clone(),
        s.agent_name.clone(),
        s.login_time.clone(),
        s.net_login.clone(),
        s.total_break.clone(),
        s.total_meeting.clone(),
        s.total_matured.to_string(),
        s.ib_matured.to_string(),
        s.ob_matured.to_string(),
        s.talk_time.clone(),
        s.aht.clone(),
    ]
}

/// JSON envelope: the rows plus a generation timestamp, since the
/// report itself carries no date dimension.
#[derive(Serialize)]
pub(crate) struct ReportEnvelope<'a> {
    pub generated_at: String,
    pub agents: &'a [AgentSummary],
}
