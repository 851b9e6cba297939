//! Left join of normalized agent rows against per-agent call counts,
//! producing the final summary rows.

use crate::core::aggregate::CallCounts;
use crate::models::{AgentRecord, AgentSummary};
use crate::utils::time::format_duration;
use std::collections::HashMap;

/// Average handle time in seconds: talk time over matured calls,
/// floored. Guarded: zero matured calls means zero AHT, not a division
/// fault.
pub fn compute_aht_secs(talk_secs: i64, total_matured: u64) -> i64 {
    if total_matured == 0 {
        0
    } else {
        talk_secs / total_matured as i64
    }
}

/// Join agents with their call counts. Agent rows always survive;
/// agents with no matching CDR rows get zero counts and a zero AHT.
pub fn join(agents: &[AgentRecord], counts: &HashMap<String, CallCounts>) -> Vec<AgentSummary> {
    agents
        .iter()
        .map(|agent| {
            let c = counts.get(&agent.id).copied().unwrap_or_default();

            AgentSummary {
                employee_id: agent.id.clone(),
                agent_name: agent.name.clone(),
                login_time: format_duration(agent.login_secs),
                net_login: format_duration(agent.net_login_secs()),
                total_break: format_duration(agent.break_secs),
                total_meeting: format_duration(agent.meeting_secs),
                total_matured: c.total_matured,
                ib_matured: c.ib_matured,
                ob_matured: c.ob_matured(),
                talk_time: format_duration(agent.talk_secs),
                aht: format_duration(compute_aht_secs(agent.talk_secs, c.total_matured)),
            }
        })
        .collect()
}
