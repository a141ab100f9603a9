//! Competitor rate analysis route.

use axum::{Json, Router, extract::State, routing::post};
use cashcast_core::pricing::{CompetitorAnalysis, PricingEngine, analyze_competitors};
use cashcast_shared::AppResult;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::error::ApiResult;

/// Creates the competitor routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/competitors", post(get_competitor_rates))
}

/// Request body for `get_competitor_rates`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitorRequest {
    /// Day to analyze.
    pub date: NaiveDate,
}

/// Runs `get_competitor_rates`.
pub fn competitor_rates(
    state: &AppState,
    request: &CompetitorRequest,
) -> AppResult<CompetitorAnalysis> {
    let engine = PricingEngine::new(&state.hotel, &state.pricing);
    let analysis = analyze_competitors(&engine, request.date, state.market.as_ref())?;

    info!(
        date = %analysis.date,
        market_average = %analysis.market.average,
        rank = analysis.position.rank,
        "Competitor analysis complete"
    );
    Ok(analysis)
}

async fn get_competitor_rates(
    State(state): State<AppState>,
    Json(request): Json<CompetitorRequest>,
) -> ApiResult<Json<CompetitorAnalysis>> {
    Ok(Json(competitor_rates(&state, &request)?))
}
