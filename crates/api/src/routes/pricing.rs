//! Dynamic pricing route.

use axum::{Json, Router, extract::State, routing::post};
use cashcast_core::pricing::{MarketDataStatus, PricingEngine, PricingReport, PricingRequest};
use cashcast_shared::AppResult;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};

use super::date_range;
use crate::AppState;
use crate::error::ApiResult;

/// Creates the pricing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/pricing", post(optimize_pricing))
}

/// Request body for `optimize_pricing`.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizePricingRequest {
    /// First priced day.
    pub start_date: NaiveDate,
    /// Last priced day (inclusive).
    pub end_date: NaiveDate,
    /// Occupancy estimate as a fraction.
    #[serde(default)]
    pub current_occupancy: Option<Decimal>,
    /// Days between booking and arrival.
    #[serde(default)]
    pub lead_days: u32,
    /// Competitor rate overriding the market source.
    #[serde(default)]
    pub competitor_rate: Option<Decimal>,
}

/// Runs `optimize_pricing`.
pub fn optimize(state: &AppState, request: &OptimizePricingRequest) -> AppResult<PricingReport> {
    let range = date_range(request.start_date, request.end_date)?;
    let engine = PricingEngine::new(&state.hotel, &state.pricing);
    let pricing_request = PricingRequest {
        occupancy: request.current_occupancy,
        lead_days: request.lead_days,
        competitor_rate: request.competitor_rate,
        ..PricingRequest::new(range)
    };

    info!(
        start = %range.start(),
        end = %range.end(),
        lead_days = request.lead_days,
        source = state.market.name(),
        "Optimizing room rates"
    );
    let report = engine.optimize(&pricing_request, state.market.as_ref())?;

    if let MarketDataStatus::Fallback { provider, reason } = &report.market {
        warn!(
            provider = %provider,
            reason = %reason,
            "Market source unavailable, pricing from configuration only"
        );
    }
    info!(
        avg_recommended_rate = %report.summary.avg_recommended_rate,
        total_uplift = %report.summary.total_uplift,
        days_capped = report.summary.days_capped,
        "Pricing complete"
    );
    Ok(report)
}

async fn optimize_pricing(
    State(state): State<AppState>,
    Json(request): Json<OptimizePricingRequest>,
) -> ApiResult<Json<PricingReport>> {
    Ok(Json(optimize(&state, &request)?))
}
