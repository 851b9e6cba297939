//! Raw sheet rows → normalized records.
//!
//! All the per-cell cleanup lives here: whitespace trimming, the `.0`
//! artifact left by numeric-typed id columns, dash placeholders, and
//! lenient duration parsing. A malformed cell degrades that field to
//! zero/empty; it never aborts the batch.

use crate::core::layout::{AgentColumns, CdrColumns};
use crate::ingest::RawSheet;
use crate::models::{AgentRecord, CallRecord};
use crate::utils::time::parse_duration;

/// Canonicalize an identifier cell: trim, then drop the trailing `.0`
/// a numeric-typed column picks up (`"101.0"` and `"101"` must join).
pub fn normalize_id(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_suffix(".0").unwrap_or(trimmed).to_string()
}

/// Duration cell with placeholder handling: blank and `"-"` mean zero.
fn duration_cell(raw: &str) -> i64 {
    let t = raw.trim();
    if t.is_empty() || t == "-" {
        return 0;
    }
    parse_duration(t)
}

/// Normalize the agent-performance sheet. Rows without an identifier
/// (spacer rows, grand-total footers) are skipped.
pub fn normalize_agents(sheet: &RawSheet, cols: &AgentColumns) -> Vec<AgentRecord> {
    let mut records = Vec::new();

    for row in sheet.rows.iter().skip(cols.body_start) {
        let id = normalize_id(sheet.cell(row, cols.id));
        if id.is_empty() {
            continue;
        }

        let break_secs: i64 = cols
            .breaks
            .iter()
            .map(|&c| duration_cell(sheet.cell(row, c)))
            .sum();
        let meeting_secs: i64 = cols
            .meetings
            .iter()
            .map(|&c| duration_cell(sheet.cell(row, c)))
            .sum();

        records.push(AgentRecord {
            id,
            name: sheet.cell(row, cols.name).trim().to_string(),
            login_secs: duration_cell(sheet.cell(row, cols.login)),
            break_secs,
            meeting_secs,
            talk_secs: duration_cell(sheet.cell(row, cols.talk)),
        });
    }

    records
}

/// Normalize the CDR sheet. Campaign and status are upper-cased so the
/// matured/inbound vocabulary compares exactly. The status gets the
/// same `.0` stripping as ids: the matured flag is numeric in some
/// exports, and `1` read back from a float-typed column is `"1.0"`.
pub fn normalize_calls(sheet: &RawSheet, cols: &CdrColumns) -> Vec<CallRecord> {
    let mut records = Vec::new();

    for row in sheet.rows.iter().skip(cols.body_start) {
        let agent_id = normalize_id(sheet.cell(row, cols.id));
        if agent_id.is_empty() {
            continue;
        }

        records.push(CallRecord {
            agent_id,
            campaign: sheet.cell(row, cols.campaign).trim().to_uppercase(),
            status: normalize_id(sheet.cell(row, cols.status)).to_uppercase(),
        });
    }

    records
}
