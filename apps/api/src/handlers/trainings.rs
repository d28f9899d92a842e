//! # Training Endpoints
//!
//! A new training is stored as `Confirmed` and a confirmation goes to the
//! trainer email on the record. Email failure is logged, not returned.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{info, warn};

use coursedesk_core::{NewTraining, Training, TrainingDetails, TrainingPatch};

use super::pdf_headers;
use crate::error::{ApiError, ApiResult, AppJson};
use crate::services::mail::training_confirmation;
use crate::services::pdf;
use crate::AppState;

async fn find(state: &AppState, id: &str) -> ApiResult<Training> {
    state
        .store
        .trainings()
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Training", id))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(new): AppJson<NewTraining>,
) -> ApiResult<(StatusCode, Json<Training>)> {
    let training = state.store.trainings().create(new).await?;

    match training_confirmation(&training) {
        Some(email) => {
            if let Err(e) = state.mailer.send(email).await {
                warn!(id = %training.id, error = %e, "Failed to send training confirmation");
            }
        }
        None => info!(id = %training.id, "Training has no trainer email, skipping confirmation"),
    }

    Ok((StatusCode::CREATED, Json(training)))
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Training>>> {
    Ok(Json(state.store.trainings().list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Training>> {
    Ok(Json(find(&state, &id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<TrainingPatch>,
) -> ApiResult<Json<Training>> {
    Ok(Json(state.store.trainings().update(&id, patch).await?))
}

pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TrainingDetails>> {
    let training = find(&state, &id).await?;
    Ok(Json(TrainingDetails::from(&training)))
}

pub async fn purchase_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let training = find(&state, &id).await?;
    let bytes = pdf::render_training_po(&training, &state.company_name)?;

    let headers = pdf_headers(&format!("PO-{}.pdf", training.id), bytes.len());
    Ok((headers, bytes))
}
