//! File ingestion: loading CSV and Excel exports into raw row/cell
//! form. No layout interpretation happens here.

mod csv;
mod sheet;
mod xlsx;

pub use sheet::RawSheet;

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Load an export file, dispatching on its extension.
pub fn load_sheet(path: &Path) -> AppResult<RawSheet> {
    if !path.exists() {
        return Err(AppError::UnreadableFile {
            path: path.display().to_string(),
            reason: "file not found".to_string(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => csv::read_csv(path),
        "xlsx" | "xlsm" => xlsx::read_xlsx(path),
        other => Err(AppError::UnsupportedInput(format!(
            "{} ({})",
            other,
            path.display()
        ))),
    }
}
