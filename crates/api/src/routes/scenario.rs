//! What-if scenario route.

use axum::{Json, Router, extract::State, routing::post};
use cashcast_core::scenario::{Scenario, ScenarioComparison, ScenarioEngine};
use cashcast_shared::AppResult;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use super::date_range;
use crate::AppState;
use crate::error::ApiResult;

/// Creates the scenario routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/scenario", post(run_scenario))
}

/// Request body for `run_scenario`. Changes are fractions (`-0.15` is -15%).
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRequest {
    /// Label for the scenario.
    #[serde(default = "default_name")]
    pub scenario_name: String,
    /// First projected day.
    pub start_date: NaiveDate,
    /// Last projected day (inclusive).
    pub end_date: NaiveDate,
    /// Occupancy change.
    #[serde(default)]
    pub occupancy_change: Decimal,
    /// Average daily rate change.
    #[serde(default)]
    pub rate_change: Decimal,
    /// Expense change applied to every outflow line.
    #[serde(default)]
    pub expense_change: Decimal,
}

fn default_name() -> String {
    "Scenario".to_string()
}

/// Runs `run_scenario`.
pub fn compare_scenario(
    state: &AppState,
    request: &ScenarioRequest,
) -> AppResult<ScenarioComparison> {
    let range = date_range(request.start_date, request.end_date)?;
    let scenario = Scenario::new(request.scenario_name.clone(), range)
        .with_occupancy_delta(request.occupancy_change)
        .with_rate_delta(request.rate_change)
        .with_expense_delta(request.expense_change);

    info!(
        scenario = %scenario.name,
        occupancy_change = %scenario.occupancy_delta,
        rate_change = %scenario.rate_delta,
        expense_change = %scenario.expense_delta,
        days = range.days(),
        "Running scenario"
    );
    let comparison = ScenarioEngine::new(&state.hotel)?.run(&scenario)?;

    info!(
        scenario = %comparison.scenario_name,
        ending_balance_delta = %comparison.cumulative.ending_balance_delta,
        days_below_minimum = comparison.cumulative.scenario_days_below_minimum,
        "Scenario complete"
    );
    Ok(comparison)
}

async fn run_scenario(
    State(state): State<AppState>,
    Json(request): Json<ScenarioRequest>,
) -> ApiResult<Json<ScenarioComparison>> {
    Ok(Json(compare_scenario(&state, &request)?))
}
