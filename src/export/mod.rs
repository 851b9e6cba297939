// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;

use crate::models::AgentSummary;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Report header row, shared with the terminal table renderer.
pub fn report_headers() -> Vec<&'static str> {
    model::get_headers()
}

/// One summary flattened to display cells, shared with the terminal
/// table renderer.
pub fn report_row(summary: &AgentSummary) -> Vec<String> {
    model::summary_to_row(summary)
}

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}
