//! Tool listing and named dispatch routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;

use crate::AppState;
use crate::error::ApiResult;
use crate::tools::{self, TOOLS, ToolSpec};

/// Creates the tool routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/{name}", post(call_tool))
}

/// Tool listing response.
#[derive(Serialize)]
pub struct ToolList {
    /// Available tools.
    pub tools: &'static [ToolSpec],
}

async fn list_tools() -> Json<ToolList> {
    Json(ToolList { tools: &TOOLS })
}

async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(arguments): Json<Value>,
) -> ApiResult<Json<Value>> {
    Ok(Json(tools::dispatch(&state, &name, arguments)?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{app, get, post_json};

    #[tokio::test]
    async fn test_list_tools() {
        let (status, body) = get(app(), "/api/v1/tools").await;

        assert_eq!(status, StatusCode::OK);
        let tools = body["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 11);
        assert_eq!(tools[1]["name"], "generate_daily_forecast");
        assert_eq!(tools[1]["required"], json!(["start_date", "end_date"]));
    }

    #[tokio::test]
    async fn test_call_tool_matches_route() {
        let arguments = json!({"start_date": "2026-03-01", "end_date": "2026-03-07"});
        let (_, via_tool) =
            post_json(app(), "/api/v1/tools/optimize_pricing", arguments.clone()).await;
        let (_, via_route) = post_json(app(), "/api/v1/pricing", arguments).await;

        assert_eq!(via_tool, via_route);
        assert_eq!(via_tool["days"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_unknown_tool_not_found() {
        let (status, body) = post_json(app(), "/api/v1/tools/book_room", json!({})).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
