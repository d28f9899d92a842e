//! Order endpoints. Orders total their items with the order quantity rule
//! (a missing or zero quantity counts once).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use coursedesk_core::{NewOrder, Order};

use crate::error::{ApiError, ApiResult, AppJson};
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Order>>> {
    Ok(Json(state.store.orders().list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(new): AppJson<NewOrder>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let order = state.store.orders().create(new).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Order>> {
    state
        .store
        .orders()
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Order", &id))
}
