use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Root route response payload.
#[derive(Serialize)]
pub struct HomeResponse {
    /// Fixed liveness message.
    pub message: &'static str,
}

/// GET / -- confirms the API is running.
async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "DataViz API is running!",
    })
}

/// Mount the root route (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
