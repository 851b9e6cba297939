//! Column-layout resolution for the two input exports.
//!
//! The production exports drift: some carry a fixed, known column
//! order below a few metadata rows, others move columns around but
//! keep recognizable header names. Both cases resolve to the same
//! thing, a set of concrete column indices per logical field, and
//! resolution fails fast with the missing field names instead of
//! letting a shifted column flow into the wrong metric.

use crate::errors::{AppError, AppResult};
use crate::ingest::RawSheet;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How column positions are found in an input sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    /// Use the configured zero-based column indices, skipping a fixed
    /// number of leading metadata/header rows.
    Fixed,
    /// Scan the first rows for a header row containing a marker token,
    /// then resolve fields by header-name aliases.
    Detect,
}

/// One logical column: a fixed index plus the header aliases used in
/// detect mode.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldSpec {
    pub index: usize,
    pub aliases: Vec<String>,
}

/// A logical value summed from several source columns (break and
/// meeting categories). In detect mode every alias that matches
/// contributes a column.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MultiFieldSpec {
    pub indices: Vec<usize>,
    pub aliases: Vec<String>,
}

/// Header-detection settings shared by both sheets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectSpec {
    /// How many leading rows to scan for the header row.
    pub scan_rows: usize,
    /// Tokens identifying the header row, matched case-insensitively
    /// as substrings of any cell.
    pub markers: Vec<String>,
}

impl Default for DetectSpec {
    fn default() -> Self {
        Self {
            scan_rows: 10,
            markers: vec![
                "agent".to_string(),
                "employee".to_string(),
                "username".to_string(),
            ],
        }
    }
}

/// Layout of the Agent Performance export.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentLayout {
    pub skip_rows: usize,
    pub id: FieldSpec,
    pub name: FieldSpec,
    pub login: FieldSpec,
    pub talk: FieldSpec,
    pub breaks: MultiFieldSpec,
    pub meetings: MultiFieldSpec,
}

impl Default for AgentLayout {
    /// Column order of the production ACD export: three metadata rows,
    /// then id, name, login, a single combined break column, talk, and
    /// meeting + system-down further right.
    fn default() -> Self {
        Self {
            skip_rows: 3,
            id: FieldSpec {
                index: 1,
                aliases: vec![
                    "employee id".to_string(),
                    "agent id".to_string(),
                    "username".to_string(),
                ],
            },
            name: FieldSpec {
                index: 2,
                aliases: vec!["agent full name".to_string(), "agent name".to_string()],
            },
            login: FieldSpec {
                index: 3,
                aliases: vec!["total login time".to_string(), "login time".to_string()],
            },
            talk: FieldSpec {
                index: 6,
                aliases: vec!["total talk time".to_string(), "talk time".to_string()],
            },
            breaks: MultiFieldSpec {
                indices: vec![5],
                aliases: vec![
                    "total break".to_string(),
                    "lunch break".to_string(),
                    "short break".to_string(),
                    "tea break".to_string(),
                ],
            },
            meetings: MultiFieldSpec {
                indices: vec![20, 23],
                aliases: vec!["meeting".to_string(), "system down".to_string()],
            },
        }
    }
}

/// Layout of the CDR export.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CdrLayout {
    pub skip_rows: usize,
    pub id: FieldSpec,
    pub campaign: FieldSpec,
    pub status: FieldSpec,
}

impl Default for CdrLayout {
    fn default() -> Self {
        Self {
            skip_rows: 3,
            id: FieldSpec {
                index: 1,
                aliases: vec![
                    "employee id".to_string(),
                    "agent id".to_string(),
                    "username".to_string(),
                ],
            },
            campaign: FieldSpec {
                index: 6,
                aliases: vec!["campaign".to_string(), "campaign name".to_string()],
            },
            status: FieldSpec {
                index: 25,
                aliases: vec![
                    "call status".to_string(),
                    "disposition".to_string(),
                    "status".to_string(),
                ],
            },
        }
    }
}

/// Concrete column indices for the agent sheet, plus the index of the
/// first data row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentColumns {
    pub body_start: usize,
    pub id: usize,
    pub name: usize,
    pub login: usize,
    pub talk: usize,
    pub breaks: Vec<usize>,
    pub meetings: Vec<usize>,
}

/// Concrete column indices for the CDR sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CdrColumns {
    pub body_start: usize,
    pub id: usize,
    pub campaign: usize,
    pub status: usize,
}

impl AgentLayout {
    pub fn resolve(
        &self,
        sheet: &RawSheet,
        strategy: LayoutStrategy,
        detect: &DetectSpec,
    ) -> AppResult<AgentColumns> {
        match strategy {
            LayoutStrategy::Fixed => self.resolve_fixed(sheet),
            LayoutStrategy::Detect => self.resolve_detect(sheet, detect),
        }
    }

    fn resolve_fixed(&self, sheet: &RawSheet) -> AppResult<AgentColumns> {
        let width = sheet.width_from(self.skip_rows);
        let mut missing = Vec::new();

        check_index("employee id", self.id.index, width, &mut missing);
        check_index("agent name", self.name.index, width, &mut missing);
        check_index("login time", self.login.index, width, &mut missing);
        check_index("talk time", self.talk.index, width, &mut missing);
        check_indices("break time", &self.breaks.indices, width, &mut missing);
        check_indices("meeting time", &self.meetings.indices, width, &mut missing);

        if !missing.is_empty() {
            return Err(AppError::layout_mismatch(missing));
        }

        Ok(AgentColumns {
            body_start: self.skip_rows,
            id: self.id.index,
            name: self.name.index,
            login: self.login.index,
            talk: self.talk.index,
            breaks: self.breaks.indices.clone(),
            meetings: self.meetings.indices.clone(),
        })
    }

    fn resolve_detect(&self, sheet: &RawSheet, detect: &DetectSpec) -> AppResult<AgentColumns> {
        let (header_row, headers) = find_header_row(sheet, detect)?;
        let mut missing = Vec::new();

        let id = match_field("employee id", &headers, &self.id.aliases, &mut missing);
        let name = match_field("agent name", &headers, &self.name.aliases, &mut missing);
        let login = match_field("login time", &headers, &self.login.aliases, &mut missing);
        let talk = match_field("talk time", &headers, &self.talk.aliases, &mut missing);
        let breaks = match_multi_field("break time", &headers, &self.breaks.aliases, &mut missing);
        let meetings =
            match_multi_field("meeting time", &headers, &self.meetings.aliases, &mut missing);

        if !missing.is_empty() {
            return Err(AppError::layout_mismatch(missing));
        }

        Ok(AgentColumns {
            body_start: header_row + 1,
            id: id.unwrap_or(0),
            name: name.unwrap_or(0),
            login: login.unwrap_or(0),
            talk: talk.unwrap_or(0),
            breaks,
            meetings,
        })
    }
}

impl CdrLayout {
    pub fn resolve(
        &self,
        sheet: &RawSheet,
        strategy: LayoutStrategy,
        detect: &DetectSpec,
    ) -> AppResult<CdrColumns> {
        match strategy {
            LayoutStrategy::Fixed => self.resolve_fixed(sheet),
            LayoutStrategy::Detect => self.resolve_detect(sheet, detect),
        }
    }

    fn resolve_fixed(&self, sheet: &RawSheet) -> AppResult<CdrColumns> {
        let width = sheet.width_from(self.skip_rows);
        let mut missing = Vec::new();

        check_index("employee id", self.id.index, width, &mut missing);
        check_index("campaign", self.campaign.index, width, &mut missing);
        check_index("call status", self.status.index, width, &mut missing);

        if !missing.is_empty() {
            return Err(AppError::layout_mismatch(missing));
        }

        Ok(CdrColumns {
            body_start: self.skip_rows,
            id: self.id.index,
            campaign: self.campaign.index,
            status: self.status.index,
        })
    }

    fn resolve_detect(&self, sheet: &RawSheet, detect: &DetectSpec) -> AppResult<CdrColumns> {
        let (header_row, headers) = find_header_row(sheet, detect)?;
        let mut missing = Vec::new();

        let id = match_field("employee id", &headers, &self.id.aliases, &mut missing);
        let campaign = match_field("campaign", &headers, &self.campaign.aliases, &mut missing);
        let status = match_field("call status", &headers, &self.status.aliases, &mut missing);

        if !missing.is_empty() {
            return Err(AppError::layout_mismatch(missing));
        }

        Ok(CdrColumns {
            body_start: header_row + 1,
            id: id.unwrap_or(0),
            campaign: campaign.unwrap_or(0),
            status: status.unwrap_or(0),
        })
    }
}

/// Locate the header row: the first of the leading `scan_rows` rows
/// where any cell contains a marker token. Returns its index and its
/// cells lowercased/trimmed for alias matching.
fn find_header_row(sheet: &RawSheet, detect: &DetectSpec) -> AppResult<(usize, Vec<String>)> {
    let limit = detect.scan_rows.min(sheet.rows.len());

    for (i, row) in sheet.rows[..limit].iter().enumerate() {
        let hit = row.iter().any(|cell| {
            let c = cell.trim().to_lowercase();
            detect.markers.iter().any(|m| c.contains(&m.to_lowercase()))
        });
        if hit {
            let headers = row.iter().map(|c| c.trim().to_lowercase()).collect();
            return Ok((i, headers));
        }
    }

    Err(AppError::layout_mismatch(["header row"]))
}

/// Resolve one field by alias equality against the header row.
fn match_field(
    field: &str,
    headers: &[String],
    aliases: &[String],
    missing: &mut Vec<String>,
) -> Option<usize> {
    for alias in aliases {
        let a = alias.to_lowercase();
        if let Some(pos) = headers.iter().position(|h| *h == a) {
            return Some(pos);
        }
    }
    missing.push(field.to_string());
    None
}

/// Resolve a summed field: every matching alias contributes a column,
/// and at least one must match.
fn match_multi_field(
    field: &str,
    headers: &[String],
    aliases: &[String],
    missing: &mut Vec<String>,
) -> Vec<usize> {
    let mut cols = Vec::new();
    for alias in aliases {
        let a = alias.to_lowercase();
        if let Some(pos) = headers.iter().position(|h| *h == a)
            && !cols.contains(&pos)
        {
            cols.push(pos);
        }
    }
    if cols.is_empty() {
        missing.push(field.to_string());
    }
    cols
}

fn check_index(field: &str, index: usize, width: usize, missing: &mut Vec<String>) {
    if index >= width {
        missing.push(field.to_string());
    }
}

fn check_indices(field: &str, indices: &[usize], width: usize, missing: &mut Vec<String>) {
    if indices.is_empty() || indices.iter().any(|&i| i >= width) {
        missing.push(field.to_string());
    }
}
