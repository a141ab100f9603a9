//! Health and service information endpoints.

use axum::{Json, Router, extract::State, routing::get};
use cashcast_shared::Currency;
use serde::Serialize;

use crate::{AppState, tools};

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Service information response.
#[derive(Serialize)]
pub struct InfoResponse {
    /// Service name.
    pub name: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Hotel display name.
    pub hotel_name: String,
    /// Planning entity.
    pub entity_id: String,
    /// Hotel location.
    pub location: String,
    /// Number of sellable rooms.
    pub room_count: u32,
    /// Reporting currency.
    pub currency: Currency,
    /// Active market source.
    pub market_source: String,
    /// Names of the available tools.
    pub tools: Vec<&'static str>,
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn service_info(State(state): State<AppState>) -> Json<InfoResponse> {
    let hotel = &state.hotel;
    Json(InfoResponse {
        name: "cashcast",
        version: env!("CARGO_PKG_VERSION"),
        hotel_name: hotel.hotel_name.clone(),
        entity_id: hotel.entity_id.clone(),
        location: hotel.location.clone(),
        room_count: hotel.room_count,
        currency: hotel.currency,
        market_source: state.market.name().to_string(),
        tools: tools::TOOLS.iter().map(|tool| tool.name).collect(),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/info", get(service_info))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{app, get};

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app(), "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_info_describes_hotel() {
        let (status, body) = get(app(), "/api/v1/info").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hotel_name"], "501-L7 Chicago Hotel");
        assert_eq!(body["entity_id"], "E501");
        assert_eq!(body["room_count"], 250);
        assert_eq!(body["currency"], "USD");
        assert_eq!(body["market_source"], "static-config");
        assert_eq!(body["tools"].as_array().unwrap().len(), 11);
    }
}
