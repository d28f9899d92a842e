use axum::extract::State;
use axum::Json;
use chrono::Utc;

use coursedesk_core::{monthly_stats, MonthlyStat};

use crate::error::ApiResult;
use crate::AppState;

/// Activity for the last six calendar months, oldest first.
pub async fn monthly(State(state): State<AppState>) -> ApiResult<Json<Vec<MonthlyStat>>> {
    let trainings = state.store.trainings().list().await?;
    let quotations = state.store.quotations().list(None).await?;
    let leads = state.store.leads().list().await?;

    let today = Utc::now().date_naive();
    Ok(Json(monthly_stats(today, &trainings, &quotations, &leads)))
}
