//! Events calendar route.

use std::str::FromStr;

use axum::{Json, Router, extract::State, routing::post};
use cashcast_core::calendar::{EventListing, list_events};
use cashcast_shared::{AppError, AppResult, EventKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::date_range;
use crate::AppState;
use crate::error::ApiResult;

/// Creates the events routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/events", post(get_events))
}

/// Request body for `get_events`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsRequest {
    /// First day searched.
    pub start_date: NaiveDate,
    /// Last day searched (inclusive).
    pub end_date: NaiveDate,
    /// Category filter (`convention`, `sports`, `festival`, `holiday`,
    /// `shopping` or `event`).
    #[serde(default)]
    pub event_type: Option<String>,
}

/// Calendar listing with the hotel location.
#[derive(Debug, Serialize)]
pub struct EventsResponse {
    /// Hotel location.
    pub location: String,
    /// Matching events.
    #[serde(flatten)]
    pub listing: EventListing,
}

/// Runs `get_events`.
pub fn events(state: &AppState, request: &EventsRequest) -> AppResult<EventsResponse> {
    let range = date_range(request.start_date, request.end_date)?;
    let kind = request
        .event_type
        .as_deref()
        .map(EventKind::from_str)
        .transpose()
        .map_err(AppError::Validation)?;

    let listing = list_events(&state.hotel.seasonality, &range, kind);
    debug!(total = listing.total, kind = ?kind, "Listed calendar events");

    Ok(EventsResponse {
        location: state.hotel.location.clone(),
        listing,
    })
}

async fn get_events(
    State(state): State<AppState>,
    Json(request): Json<EventsRequest>,
) -> ApiResult<Json<EventsResponse>> {
    Ok(Json(events(&state, &request)?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{app, post_json};

    #[tokio::test]
    async fn test_events_filtered_by_kind() {
        let (status, body) = post_json(
            app(),
            "/api/v1/events",
            json!({"start_date": "2026-04-01", "end_date": "2026-04-30", "event_type": "sports"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["location"], "Chicago, Illinois");
        assert_eq!(body["total"], 3);
        assert_eq!(body["counts"]["sports"], 3);
        assert_eq!(body["events"][2]["name"], "NCAA Championship");
    }

    #[tokio::test]
    async fn test_unknown_event_type_rejected() {
        let (status, body) = post_json(
            app(),
            "/api/v1/events",
            json!({"start_date": "2026-04-01", "end_date": "2026-04-30", "event_type": "opera"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}
