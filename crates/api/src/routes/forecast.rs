//! Daily forecast and cash position routes.

use axum::{Json, Router, extract::State, routing::post};
use cashcast_core::calendar::DateRange;
use cashcast_core::forecast::{
    CashFlowProjector, CashPosition, DailyProjection, Forecast, ForecastSummary,
};
use cashcast_shared::{AppResult, Currency};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::date_range;
use crate::AppState;
use crate::error::ApiResult;

/// Creates the forecast routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", post(generate_daily_forecast))
        .route("/cash-position", post(get_cash_position))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for `generate_daily_forecast`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastRequest {
    /// First projected day.
    pub start_date: NaiveDate,
    /// Last projected day (inclusive).
    pub end_date: NaiveDate,
    /// Include the day-by-day table (default true).
    #[serde(default = "default_true")]
    pub include_details: bool,
}

const fn default_true() -> bool {
    true
}

/// Forecast with an optional daily table.
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    /// Hotel display name.
    pub hotel_name: String,
    /// Planning entity.
    pub entity_id: String,
    /// Reporting currency.
    pub currency: Currency,
    /// Projected range.
    pub range: DateRange,
    /// Range totals.
    pub summary: ForecastSummary,
    /// Daily projections, omitted unless details were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<DailyProjection>>,
}

/// Request body for `get_cash_position`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CashPositionRequest {
    /// Day to report (defaults to today, UTC).
    #[serde(default)]
    pub as_of_date: Option<NaiveDate>,
}

// ============================================================================
// Operations
// ============================================================================

/// Projects every day of the requested range.
pub fn build_forecast(state: &AppState, request: &ForecastRequest) -> AppResult<Forecast> {
    let range = date_range(request.start_date, request.end_date)?;
    let projector = CashFlowProjector::new(&state.hotel)?;

    info!(
        start = %range.start(),
        end = %range.end(),
        days = range.days(),
        "Generating daily forecast"
    );
    let forecast = projector.project(&range)?;

    if forecast.summary.days_below_minimum > 0 {
        warn!(
            days_below_minimum = forecast.summary.days_below_minimum,
            lowest_balance = %forecast.summary.lowest_balance,
            "Forecast falls below minimum reserve"
        );
    }
    Ok(forecast)
}

/// Runs `generate_daily_forecast`.
pub fn daily_forecast(state: &AppState, request: &ForecastRequest) -> AppResult<ForecastResponse> {
    let forecast = build_forecast(state, request)?;
    Ok(ForecastResponse {
        hotel_name: forecast.hotel_name,
        entity_id: forecast.entity_id,
        currency: forecast.currency,
        range: forecast.range,
        summary: forecast.summary,
        days: request.include_details.then_some(forecast.days),
    })
}

/// Runs `get_cash_position`.
pub fn cash_position(state: &AppState, request: &CashPositionRequest) -> AppResult<CashPosition> {
    let as_of = request.as_of_date.unwrap_or_else(|| Utc::now().date_naive());
    let projector = CashFlowProjector::new(&state.hotel)?;

    info!(as_of = %as_of, "Computing cash position");
    Ok(projector.cash_position(as_of)?)
}

// ============================================================================
// Handlers
// ============================================================================

async fn generate_daily_forecast(
    State(state): State<AppState>,
    Json(request): Json<ForecastRequest>,
) -> ApiResult<Json<ForecastResponse>> {
    Ok(Json(daily_forecast(&state, &request)?))
}

async fn get_cash_position(
    State(state): State<AppState>,
    Json(request): Json<CashPositionRequest>,
) -> ApiResult<Json<CashPosition>> {
    Ok(Json(cash_position(&state, &request)?))
}
