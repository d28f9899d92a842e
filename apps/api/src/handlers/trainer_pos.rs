//! # Trainer Purchase Order Endpoints
//!
//! Creating a PO notifies the trainer by email when the trainer record
//! exists. The PO is stored first; a failed email never undoes it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

use coursedesk_core::{NewTrainerPo, TrainerPo};

use crate::error::{ApiResult, AppJson};
use crate::services::mail::trainer_po_notice;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<TrainerPo>>> {
    Ok(Json(state.store.trainer_pos().list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(new): AppJson<NewTrainerPo>,
) -> ApiResult<(StatusCode, Json<TrainerPo>)> {
    let po = state.store.trainer_pos().create(new).await?;

    match state.store.trainers().get(&po.trainer_id).await {
        Ok(Some(trainer)) => {
            let email = trainer_po_notice(&trainer, &po, &state.company_name);
            if let Err(e) = state.mailer.send(email).await {
                warn!(po_number = %po.po_number, error = %e, "Failed to email trainer PO");
            }
        }
        Ok(None) => {
            info!(trainer_id = %po.trainer_id, "No trainer record for PO, skipping email");
        }
        Err(e) => {
            warn!(trainer_id = %po.trainer_id, error = %e, "Trainer lookup failed, skipping email");
        }
    }

    Ok((StatusCode::CREATED, Json(po)))
}
