use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use coursedesk_core::{NewTrainer, Trainer, TrainerPatch};

use crate::error::{ApiResult, AppJson};
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Trainer>>> {
    Ok(Json(state.store.trainers().list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(new): AppJson<NewTrainer>,
) -> ApiResult<(StatusCode, Json<Trainer>)> {
    let trainer = state.store.trainers().create(new).await?;
    Ok((StatusCode::CREATED, Json(trainer)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<TrainerPatch>,
) -> ApiResult<Json<Trainer>> {
    Ok(Json(state.store.trainers().update(&id, patch).await?))
}
