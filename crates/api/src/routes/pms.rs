//! Property management system routes.

use axum::{Json, Router, extract::State, routing::post};
use cashcast_core::pricing::{
    DEFAULT_RATE_CODE, InventoryOutlook, PricingEngine, RateComparison, compare_pms_rates,
    inventory_outlook,
};
use cashcast_shared::AppResult;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use super::date_range;
use crate::AppState;
use crate::error::ApiResult;

/// Creates the PMS routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pms/rates", post(fetch_opera_rates))
        .route("/pms/inventory", post(get_opera_inventory))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for `fetch_opera_rates`.
#[derive(Debug, Clone, Deserialize)]
pub struct PmsRatesRequest {
    /// First day, inclusive.
    pub start_date: NaiveDate,
    /// Last day, inclusive.
    pub end_date: NaiveDate,
    /// Rate plan to compare.
    #[serde(default = "default_rate_code")]
    pub rate_code: String,
}

fn default_rate_code() -> String {
    DEFAULT_RATE_CODE.to_string()
}

/// Request body for `get_opera_inventory`.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryRequest {
    /// First day, inclusive.
    pub start_date: NaiveDate,
    /// Last day, inclusive.
    pub end_date: NaiveDate,
}

// ============================================================================
// Operations
// ============================================================================

/// Runs `fetch_opera_rates`.
pub fn pms_rates(state: &AppState, request: &PmsRatesRequest) -> AppResult<RateComparison> {
    let range = date_range(request.start_date, request.end_date)?;
    let engine = PricingEngine::new(&state.hotel, &state.pricing);
    let comparison =
        compare_pms_rates(&engine, &range, &request.rate_code, state.market.as_ref())?;

    info!(
        rate_code = %comparison.rate_code,
        days = comparison.summary.days,
        to_increase = comparison.summary.rates_to_increase,
        to_decrease = comparison.summary.rates_to_decrease,
        "Compared PMS rates"
    );
    Ok(comparison)
}

/// Runs `get_opera_inventory`.
pub fn inventory(state: &AppState, request: &InventoryRequest) -> AppResult<InventoryOutlook> {
    let range = date_range(request.start_date, request.end_date)?;
    let engine = PricingEngine::new(&state.hotel, &state.pricing);
    let outlook = inventory_outlook(&engine, &range, state.market.as_ref())?;

    info!(
        days = outlook.summary.days,
        avg_occupancy = %outlook.summary.avg_occupancy,
        "Loaded PMS inventory"
    );
    Ok(outlook)
}

// ============================================================================
// Handlers
// ============================================================================

async fn fetch_opera_rates(
    State(state): State<AppState>,
    Json(request): Json<PmsRatesRequest>,
) -> ApiResult<Json<RateComparison>> {
    Ok(Json(pms_rates(&state, &request)?))
}

async fn get_opera_inventory(
    State(state): State<AppState>,
    Json(request): Json<InventoryRequest>,
) -> ApiResult<Json<InventoryOutlook>> {
    Ok(Json(inventory(&state, &request)?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{app, post_json};

    #[tokio::test]
    async fn test_pms_rates_default_to_bar() {
        let (status, body) = post_json(
            app(),
            "/api/v1/pms/rates",
            json!({"start_date": "2026-03-04", "end_date": "2026-03-08"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rate_code"], "BAR");
        assert_eq!(body["property_id"], "CHICAGOL7");
        assert_eq!(body["summary"]["days"], 5);
        assert_eq!(body["days"][0]["pms_rate"], "189.00");
        assert_eq!(body["days"][0]["action"], "INCREASE");
        assert_eq!(body["days"][2]["pms_rate"], "226.80");
    }

    #[tokio::test]
    async fn test_pms_rates_reject_long_range() {
        let (status, body) = post_json(
            app(),
            "/api/v1/pms/rates",
            json!({"start_date": "2026-01-01", "end_date": "2026-06-30"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_inventory() {
        let (status, body) = post_json(
            app(),
            "/api/v1/pms/inventory",
            json!({"start_date": "2026-03-04", "end_date": "2026-03-04"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["days"][0]["occupied"], 188);
        assert_eq!(body["days"][0]["tier"], "high");
        assert_eq!(body["days"][0]["recommended_rate"], "281.85");
        assert_eq!(body["summary"]["total_available"], 62);
    }
}
