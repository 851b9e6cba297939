// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ReportEnvelope, get_headers, summary_to_row};
use crate::export::notify_export_success;
use crate::models::AgentSummary;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed, wrapped in a generated-at envelope.
pub(crate) fn export_json(summaries: &[AgentSummary], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let envelope = ReportEnvelope {
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        agents: summaries,
    };

    let json_data = serde_json::to_string_pretty(&envelope)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the report's header row.
pub(crate) fn export_csv(summaries: &[AgentSummary], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for item in summaries {
        wtr.write_record(summary_to_row(item))
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
