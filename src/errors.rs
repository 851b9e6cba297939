//! Unified application error type.
//! All modules (ingest, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Ingest-related
    // ---------------------------
    #[error("Could not read file '{path}': {reason}")]
    UnreadableFile { path: String, reason: String },

    #[error("Unsupported input format '{0}' (expected .csv, .xlsx or .xlsm)")]
    UnsupportedInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    // ---------------------------
    // Layout errors
    // ---------------------------
    #[error("File layout not recognized: could not locate column(s) {}", .fields.join(", "))]
    LayoutMismatch { fields: Vec<String> },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Missing-column error naming the logical fields that could not be
    /// located in the input sheet.
    pub fn layout_mismatch<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AppError::LayoutMismatch {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
