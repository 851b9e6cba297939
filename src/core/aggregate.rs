//! Per-agent derived metrics: time totals on the agent side, matured
//! call counts on the CDR side.

use crate::models::CallRecord;
use std::collections::HashMap;

/// Matured-call counts for one agent.
///
/// `ob_matured` is always the complement `total - ib`, never an
/// independent filter on an "outbound" tag: the exports carry many
/// outbound campaign labels but exactly one inbound one, and the two
/// counts must sum to the total by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub total_matured: u64,
    pub ib_matured: u64,
}

impl CallCounts {
    pub fn ob_matured(&self) -> u64 {
        self.total_matured - self.ib_matured
    }
}

/// Group CDR records by agent id, counting matured calls and the
/// inbound subset. Non-matured rows contribute nothing; rows for
/// agents absent from the agent sheet simply never get looked up by
/// the join.
pub fn aggregate_calls(records: &[CallRecord]) -> HashMap<String, CallCounts> {
    let mut counts: HashMap<String, CallCounts> = HashMap::new();

    for rec in records {
        if !rec.is_matured() {
            continue;
        }

        let entry = counts.entry(rec.agent_id.clone()).or_default();
        entry.total_matured += 1;
        if rec.is_inbound() {
            entry.ib_matured += 1;
        }
    }

    counts
}
