//! # Quotation Endpoints
//!
//! Quotations carry the line-item money model: every write recomputes
//! subtotal, GST and total from the items, and every `PUT` leaves an entry
//! in the edit history.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use coursedesk_core::{
    analyze_profit_with, totalize_items, validate_line_items, CostRatioTable, LineItem, Money,
    NewQuotation, Order, ProfitBreakdown, QuantityPolicy, Quotation, QuotationEdit,
    QuotationPatch, QuotationStatus,
};

use super::pdf_headers;
use crate::error::{ApiError, ApiResult, AppJson};
use crate::services::pdf;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub lead_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(flatten)]
    pub patch: QuotationPatch,
    pub edit_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: QuotationStatus,
}

#[derive(Debug, Deserialize)]
pub struct TotalsRequest {
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Live totals for a quotation form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsResponse {
    pub per_item_totals: Vec<Money>,
    pub subtotal: Money,
    pub gst: Money,
    pub total: Money,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitResponse {
    #[serde(flatten)]
    pub breakdown: ProfitBreakdown,
    pub target_progress_pct: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub order_number: Option<String>,
    pub order_date: Option<NaiveDate>,
}

async fn find(state: &AppState, id: &str) -> ApiResult<Quotation> {
    state
        .store
        .quotations()
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Quotation", id))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(new): AppJson<NewQuotation>,
) -> ApiResult<(StatusCode, Json<Quotation>)> {
    let quotation = state.store.quotations().create(new).await?;
    Ok((StatusCode::CREATED, Json(quotation)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Quotation>>> {
    let lead_id = params.lead_id.as_deref().filter(|l| !l.is_empty());
    Ok(Json(state.store.quotations().list(lead_id).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Quotation>> {
    Ok(Json(find(&state, &id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateRequest>,
) -> ApiResult<Json<Quotation>> {
    let quotation = state
        .store
        .quotations()
        .update(&id, request.patch, request.edit_reason)
        .await?;
    Ok(Json(quotation))
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<StatusRequest>,
) -> ApiResult<Json<Quotation>> {
    let quotation = state
        .store
        .quotations()
        .update_status(&id, request.status)
        .await?;
    Ok(Json(quotation))
}

pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<QuotationEdit>>> {
    Ok(Json(state.store.quotations().history(&id).await?))
}

/// Rows whose totals exceed the money range are a 400, as on save.
pub async fn totals(
    State(state): State<AppState>,
    AppJson(request): AppJson<TotalsRequest>,
) -> ApiResult<Json<TotalsResponse>> {
    validate_line_items("items", &request.items, QuantityPolicy::Quotation)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let totals = totalize_items(&request.items, QuantityPolicy::Quotation);
    let taxed = state.store.tax().apply_tax(totals.subtotal);
    debug!(items = request.items.len(), subtotal = %totals.subtotal, "Computed live totals");

    Ok(Json(TotalsResponse {
        per_item_totals: totals.per_item_totals,
        subtotal: totals.subtotal,
        gst: taxed.tax,
        total: taxed.grand_total,
    }))
}

pub async fn profit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProfitResponse>> {
    let quotation = find(&state, &id).await?;
    let breakdown = analyze_profit_with(
        &quotation.items,
        &CostRatioTable::default(),
        state.store.tax(),
    );
    let target_progress_pct = breakdown.target_progress_pct();

    Ok(Json(ProfitResponse {
        breakdown,
        target_progress_pct,
    }))
}

pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let quotation = find(&state, &id).await?;
    let bytes = pdf::render_quotation(&quotation, &state.company_name, state.store.tax())?;
    info!(id = %id, bytes = bytes.len(), "Rendered quotation PDF");

    let headers = pdf_headers(&format!("Quotation-{}.pdf", quotation.id), bytes.len());
    Ok((headers, bytes))
}

/// Body is optional; without it the order gets a generated number and
/// today's date.
pub async fn convert_to_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let request: ConvertRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ConvertRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?
    };
    let order_date = request.order_date.unwrap_or_else(|| Utc::now().date_naive());

    let order = state
        .store
        .orders()
        .create_from_quotation(&id, request.order_number, order_date)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}
