// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::AgentSummary;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the report rows to `file` in the requested format.
    ///
    /// The report is handed in explicitly: there is no shared
    /// "current report" state anywhere, each export works on the rows
    /// the caller just computed.
    pub fn export(
        summaries: &[AgentSummary],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(AppError::Export(format!(
                "Output directory does not exist: {}",
                parent.display()
            )));
        }

        ensure_writable(path, force)?;

        if summaries.is_empty() {
            warning("No agent rows found in the performance export.");
        }

        match format {
            ExportFormat::Csv => export_csv(summaries, path)?,
            ExportFormat::Json => export_json(summaries, path)?,
            ExportFormat::Xlsx => export_xlsx(summaries, path)?,
        }

        Ok(())
    }
}
