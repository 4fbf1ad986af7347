//! Route for the processed-data endpoint.
//!
//! Every call re-reads the dataset from disk and re-aggregates -- there is
//! deliberately no caching, so edits to the data file show up on the next
//! request.

use axum::extract::State;
use axum::{routing::get, Json, Router};

use dataviz_core::aggregate::{aggregate, SensorAggregate};
use dataviz_core::dataset::load_readings;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/data/processed -- load the dataset, group by sensor, and return
/// per-sensor summary statistics.
async fn processed(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<SensorAggregate>>>> {
    let readings = load_readings(&state.config.data_path)?;
    let aggregates = aggregate(&readings);

    tracing::debug!(
        rows = readings.len(),
        sensors = aggregates.len(),
        "Aggregated dataset"
    );

    Ok(Json(ApiResponse::ok(
        aggregates,
        "Data processed and retrieved successfully.",
    )))
}

/// Mount data routes (intended to be nested under `/api/data`).
pub fn router() -> Router<AppState> {
    Router::new().route("/processed", get(processed))
}
