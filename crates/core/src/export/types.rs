//! Export data types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ExportError;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Fixed-width text.
    #[default]
    Summary,
    /// Comma-separated values.
    Csv,
    /// Structured JSON document.
    Json,
}

impl ExportFormat {
    /// MIME type of the rendered output.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Summary => "text/plain; charset=utf-8",
            Self::Csv => "text/csv; charset=utf-8",
            Self::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Summary => "summary",
            Self::Csv => "csv",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Identification stamped on every exported report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMeta {
    /// Unique report identifier.
    pub report_id: Uuid,
    /// Hotel display name.
    pub hotel_name: String,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

impl ReportMeta {
    /// Creates metadata with a fresh identifier and the current time.
    #[must_use]
    pub fn new(hotel_name: impl Into<String>) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            hotel_name: hotel_name.into(),
            generated_at: Utc::now(),
        }
    }
}

/// Rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedReport {
    /// Report identifier.
    pub report_id: Uuid,
    /// Report kind (e.g. "forecast").
    pub report_type: &'static str,
    /// Output format.
    pub format: ExportFormat,
    /// MIME type of `content`.
    pub content_type: &'static str,
    /// Rendered document.
    pub content: String,
}
