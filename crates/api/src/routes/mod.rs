pub mod data;
pub mod home;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /data/processed    aggregated per-sensor statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/data", data::router())
}
