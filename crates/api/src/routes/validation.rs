//! Forecast validation route.

use axum::{Json, Router, extract::State, routing::post};
use cashcast_core::forecast::CashFlowProjector;
use cashcast_core::validation::{
    ForecastValidator, ProjectedTotals, ValidationInput, ValidationResult,
};
use cashcast_shared::{AppError, AppResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::error::ApiResult;

/// Creates the validation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/validate", post(validate_forecast))
}

/// Request body for `validate_forecast`.
///
/// Projected totals are optional but must be supplied together; when
/// absent the projector's baseline for `forecast_date` is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    /// Day being validated.
    pub forecast_date: NaiveDate,
    /// Actual cash received.
    pub actual_inflows: Decimal,
    /// Actual cash paid.
    pub actual_outflows: Decimal,
    /// Projected inflows to compare against.
    #[serde(default)]
    pub projected_inflows: Option<Decimal>,
    /// Projected outflows to compare against.
    #[serde(default)]
    pub projected_outflows: Option<Decimal>,
}

/// Runs `validate_forecast`.
pub fn validate(state: &AppState, request: &ValidateRequest) -> AppResult<ValidationResult> {
    let projected = match (request.projected_inflows, request.projected_outflows) {
        (Some(inflows), Some(outflows)) => Some(ProjectedTotals { inflows, outflows }),
        (None, None) => None,
        _ => {
            return Err(AppError::Validation(
                "projected_inflows and projected_outflows must be supplied together".to_string(),
            ));
        }
    };

    let projector = CashFlowProjector::new(&state.hotel)?;
    let result = ForecastValidator::new(projector).validate(&ValidationInput {
        date: request.forecast_date,
        actual_inflows: request.actual_inflows,
        actual_outflows: request.actual_outflows,
        projected,
    })?;

    info!(
        date = %result.date,
        accuracy = ?result.overall_accuracy,
        assessment = ?result.assessment,
        "Forecast validated"
    );
    Ok(result)
}

async fn validate_forecast(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> ApiResult<Json<ValidationResult>> {
    Ok(Json(validate(&state, &request)?))
}
