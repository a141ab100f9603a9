//! Report export in summary text, CSV, and JSON formats.

pub mod error;
pub mod render;
pub mod tables;
pub mod types;


pub use error::ExportError;
pub use render::{export, render_csv, render_json, render_summary};
pub use tables::TabularReport;
pub use types::{ExportFormat, ExportedReport, ReportMeta};
