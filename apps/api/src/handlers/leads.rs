use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use coursedesk_core::{Lead, NewLead};

use crate::error::{ApiResult, AppJson};
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Lead>>> {
    Ok(Json(state.store.leads().list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(new): AppJson<NewLead>,
) -> ApiResult<(StatusCode, Json<Lead>)> {
    let lead = state.store.leads().create(new).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}
