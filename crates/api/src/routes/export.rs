//! Report export route.

use std::str::FromStr;

use axum::{Json, Router, extract::State, routing::post};
use cashcast_core::export::{ExportFormat, ExportedReport, ReportMeta, TabularReport, export};
use cashcast_shared::{AppError, AppResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use super::{forecast, planning, pricing, scenario, validation};
use crate::AppState;
use crate::error::ApiResult;

/// Creates the export routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/export", post(export_report))
}

/// Request body for `export_report`.
///
/// `arguments` carries the inputs of the report being exported, in the
/// same shape as the report's own tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    /// Report kind: `forecast`, `scenario`, `pricing`, `validation` or `monthly`.
    pub report: String,
    /// Output format (`summary`, `csv` or `json`; default `summary`).
    #[serde(default)]
    pub format: Option<String>,
    /// Inputs of the report.
    #[serde(default)]
    pub arguments: Value,
}

fn arguments<T: DeserializeOwned>(value: &Value) -> AppResult<T> {
    T::deserialize(value).map_err(|e| AppError::Validation(format!("Invalid arguments: {e}")))
}

fn render<R: TabularReport>(
    state: &AppState,
    report: &R,
    format: ExportFormat,
) -> AppResult<ExportedReport> {
    let meta = ReportMeta::new(state.hotel.hotel_name.clone());
    let exported = export(report, format, &meta)?;

    info!(
        report_id = %exported.report_id,
        report_type = exported.report_type,
        format = %exported.format,
        bytes = exported.content.len(),
        "Report exported"
    );
    Ok(exported)
}

/// Runs `export_report`.
pub fn export_report_for(state: &AppState, request: &ExportRequest) -> AppResult<ExportedReport> {
    let format = request
        .format
        .as_deref()
        .map(ExportFormat::from_str)
        .transpose()?
        .unwrap_or_default();
    let args = &request.arguments;

    match request.report.trim().to_lowercase().as_str() {
        "forecast" => render(
            state,
            &forecast::build_forecast(state, &arguments(args)?)?,
            format,
        ),
        "scenario" => render(
            state,
            &scenario::compare_scenario(state, &arguments(args)?)?,
            format,
        ),
        "pricing" => render(state, &pricing::optimize(state, &arguments(args)?)?, format),
        "validation" => render(
            state,
            &validation::validate(state, &arguments(args)?)?,
            format,
        ),
        "monthly" => render(state, &planning::monthly(state, &arguments(args)?)?, format),
        other => Err(AppError::Validation(format!("Unknown report type: {other}"))),
    }
}

async fn export_report(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> ApiResult<Json<ExportedReport>> {
    Ok(Json(export_report_for(&state, &request)?))
}
