//! Export error types.

use cashcast_shared::AppError;
use thiserror::Error;

/// Export-related errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Requested format is not one of summary, csv, json.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// CSV writer failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendered output was not valid UTF-8.
    #[error("Export encoding failed: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::UnsupportedFormat(_) => Self::Validation(err.to_string()),
            _ => Self::Internal(err.to_string()),
        }
    }
}
