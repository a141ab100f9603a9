//! Tool surface for Cashcast.
//!
//! This crate provides:
//! - REST routes for every tool under `/api/v1`
//! - Named tool dispatch (`GET /tools`, `POST /tools/{name}`)
//! - A line-delimited JSON transport for stdio
//! - Error responses mapped from `AppError`

pub mod error;
pub mod routes;
pub mod stdio;
pub mod tools;

use std::sync::Arc;

use axum::Router;
use cashcast_core::pricing::{MarketSource, StaticMarketSource};
use cashcast_shared::{HotelConfig, PricingConfig};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Hotel being forecast.
    pub hotel: Arc<HotelConfig>,
    /// Dynamic pricing tables.
    pub pricing: Arc<PricingConfig>,
    /// Competitor rate and event feed.
    pub market: Arc<dyn MarketSource>,
}

impl AppState {
    /// Creates state backed by the configuration-driven market source.
    #[must_use]
    pub fn new(hotel: HotelConfig, pricing: PricingConfig) -> Self {
        let market = StaticMarketSource::new(&pricing, &hotel);
        Self {
            hotel: Arc::new(hotel),
            pricing: Arc::new(pricing),
            market: Arc::new(market),
        }
    }

    /// Replaces the market source.
    #[must_use]
    pub fn with_market_source(mut self, market: Arc<dyn MarketSource>) -> Self {
        self.market = market;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("hotel", &self.hotel.hotel_name)
            .field("market", &self.market.name())
            .finish_non_exhaustive()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
