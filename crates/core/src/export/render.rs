//! Renderers for each export format.

use std::fmt::Write as _;

use serde::Serialize;

use super::error::ExportError;
use super::tables::TabularReport;
use super::types::{ExportFormat, ExportedReport, ReportMeta};

const COLUMN_GAP: &str = "  ";
const EMPTY_CELL: &str = "-";

/// Renders `report` in the requested format.
///
/// # Errors
///
/// Returns `ExportError` if the CSV or JSON serializer fails.
pub fn export<R: TabularReport>(
    report: &R,
    format: ExportFormat,
    meta: &ReportMeta,
) -> Result<ExportedReport, ExportError> {
    let content = match format {
        ExportFormat::Summary => render_summary(report, meta),
        ExportFormat::Csv => render_csv(report)?,
        ExportFormat::Json => render_json(report, meta)?,
    };

    Ok(ExportedReport {
        report_id: meta.report_id,
        report_type: report.report_type(),
        format,
        content_type: format.content_type(),
        content,
    })
}

/// Header row followed by one record per row.
///
/// # Errors
///
/// Returns `ExportError::Csv` on writer failure.
pub fn render_csv<R: TabularReport>(report: &R) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(report.columns())?;
    for row in report.rows() {
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[derive(Serialize)]
struct JsonEnvelope<'a, R: Serialize> {
    report_id: String,
    hotel_name: &'a str,
    generated_at: String,
    report_type: &'static str,
    title: String,
    data: &'a R,
}

/// Pretty-printed JSON document wrapping the full report.
///
/// # Errors
///
/// Returns `ExportError::Json` on serializer failure.
pub fn render_json<R: TabularReport>(report: &R, meta: &ReportMeta) -> Result<String, ExportError> {
    let envelope = JsonEnvelope {
        report_id: meta.report_id.to_string(),
        hotel_name: &meta.hotel_name,
        generated_at: meta.generated_at.to_rfc3339(),
        report_type: report.report_type(),
        title: report.title(),
        data: report,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Fixed-width text: header block, summary metrics, then the table.
#[must_use]
pub fn render_summary<R: TabularReport>(report: &R, meta: &ReportMeta) -> String {
    let columns = report.columns();
    let rows: Vec<Vec<String>> = report
        .rows()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| if cell.is_empty() { EMPTY_CELL.to_string() } else { cell })
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = format_row(&columns, &widths);
    let divider_width = header.chars().count().max(report.title().chars().count()).max(40);
    let divider = "=".repeat(divider_width);

    let mut out = String::new();
    let _ = writeln!(out, "{divider}");
    let _ = writeln!(out, "{}", report.title());
    let _ = writeln!(out, "Report ID: {}", meta.report_id);
    let _ = writeln!(out, "Generated: {}", meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(out, "{divider}");

    let summary = report.summary();
    let label_width = summary.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in &summary {
        let value = if value.is_empty() { EMPTY_CELL } else { value };
        let _ = writeln!(out, "{label:<label_width$} : {value}");
    }

    let _ = writeln!(out, "{divider}");
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "-".repeat(header.chars().count()));
    for row in &rows {
        let _ = writeln!(out, "{}", format_row(row, &widths));
    }
    let _ = writeln!(out, "{divider}");
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}
