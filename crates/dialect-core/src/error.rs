// crates/dialect-core/src/error.rs
use thiserror::Error;

/// Errors that abort a conversion run.
///
/// Per-row problems (bad coordinates, missing text cells) are never errors;
/// they are recovered by the record builder and reported as warnings.
#[derive(Debug, Error)]
pub enum DialectError {
    /// The input table does not exist or cannot be opened.
    #[error("input not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "spreadsheet")]
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is absent from the header row.
    #[error("missing required column '{column}' (accepted headers: {accepted})")]
    MissingColumn {
        column: &'static str,
        accepted: String,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, DialectError>;
