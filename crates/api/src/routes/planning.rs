//! Monthly planning export route.

use axum::{Json, Router, extract::State, routing::post};
use cashcast_core::forecast::CashFlowProjector;
use cashcast_core::planning::{MonthlyRollup, monthly_rollup};
use cashcast_shared::AppResult;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use super::date_range;
use crate::AppState;
use crate::error::ApiResult;

/// Creates the planning routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/planning/monthly", post(export_monthly_for_planning))
}

/// Request body for `export_monthly_for_planning`.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyRequest {
    /// First projected day.
    pub start_date: NaiveDate,
    /// Last projected day (inclusive).
    pub end_date: NaiveDate,
    /// Planning scenario member (defaults to the configured one).
    #[serde(default)]
    pub scenario: Option<String>,
}

/// Runs `export_monthly_for_planning`.
pub fn monthly(state: &AppState, request: &MonthlyRequest) -> AppResult<MonthlyRollup> {
    let range = date_range(request.start_date, request.end_date)?;
    let scenario = request
        .scenario
        .as_deref()
        .unwrap_or(&state.hotel.planning.scenario);

    let forecast = CashFlowProjector::new(&state.hotel)?.project(&range)?;
    let rollup = monthly_rollup(&forecast, &state.hotel, scenario);

    info!(
        scenario = %rollup.scenario,
        months = rollup.months.len(),
        records = rollup.records.len(),
        "Built monthly planning roll-up"
    );
    Ok(rollup)
}

async fn export_monthly_for_planning(
    State(state): State<AppState>,
    Json(request): Json<MonthlyRequest>,
) -> ApiResult<Json<MonthlyRollup>> {
    Ok(Json(monthly(&state, &request)?))
}
