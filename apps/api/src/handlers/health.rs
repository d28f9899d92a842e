use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::warn;

use crate::AppState;

/// Liveness plus a check that the data directory is still there.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    if state.store.health_check().await {
        (StatusCode::OK, Json(json!({ "status": "ok" })))
    } else {
        warn!(data_dir = %state.store.data_dir().display(), "Data directory unavailable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        )
    }
}
