//! API route definitions.

use axum::Router;
use cashcast_core::calendar::DateRange;
use cashcast_shared::AppResult;
use chrono::NaiveDate;

use crate::AppState;

pub mod competitors;
pub mod events;
pub mod export;
pub mod forecast;
pub mod health;
pub mod planning;
pub mod pms;
pub mod pricing;
pub mod scenario;
pub mod tools;
pub mod validation;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(forecast::routes())
        .merge(scenario::routes())
        .merge(validation::routes())
        .merge(pricing::routes())
        .merge(competitors::routes())
        .merge(pms::routes())
        .merge(events::routes())
        .merge(planning::routes())
        .merge(export::routes())
        .merge(tools::routes())
}

/// Builds a bounded inclusive range from request dates.
pub(crate) fn date_range(start: NaiveDate, end: NaiveDate) -> AppResult<DateRange> {
    Ok(DateRange::new(start, end)?)
}
