//! # coursedesk-api: HTTP API for Coursedesk
//!
//! JSON endpoints for the back-office UI, PDF downloads and trainer emails.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Request Flow                                   │
//! │                                                                         │
//! │  Browser ──► Router (TraceLayer) ──► handlers::* ──► Store repositories │
//! │                                          │                              │
//! │                                          ├──► services::pdf  (printpdf) │
//! │                                          └──► services::mail (lettre)   │
//! │                                                                         │
//! │  Any failure ──► ApiError ──► { "error": "..." } + status code           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Routes
//!
//! | Path                                | Methods          |
//! |-------------------------------------|------------------|
//! | `/health`                           | GET              |
//! | `/api/quotations`                   | GET, POST        |
//! | `/api/quotations/totals`            | POST             |
//! | `/api/quotations/{id}`               | GET, PUT         |
//! | `/api/quotations/{id}/status`        | PATCH            |
//! | `/api/quotations/{id}/history`       | GET              |
//! | `/api/quotations/{id}/profit`        | GET              |
//! | `/api/quotations/{id}/download`      | GET              |
//! | `/api/quotations/{id}/order`         | POST             |
//! | `/api/leads`                        | GET, POST        |
//! | `/api/orders`, `/api/orders/{id}`    | GET, POST / GET  |
//! | `/api/trainers`, `/api/trainers/{id}` | GET, POST / PUT |
//! | `/api/trainer-pos`                  | GET, POST        |
//! | `/api/training`, `/api/trainings`   | POST / GET       |
//! | `/api/training/{id}`                 | GET, PUT         |
//! | `/api/training/{id}/details`         | GET              |
//! | `/api/training/{id}/po`              | GET              |
//! | `/api/reports/monthly`              | GET              |

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::routing::{get, patch, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use coursedesk_store::Store;

use crate::services::mail::Mailer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub mailer: Arc<dyn Mailer>,
    /// Printed on PDFs and used to sign emails.
    pub company_name: Arc<str>,
}

impl AppState {
    pub fn new(store: Store, mailer: Arc<dyn Mailer>, company_name: impl Into<Arc<str>>) -> Self {
        AppState {
            store,
            mailer,
            company_name: company_name.into(),
        }
    }
}

/// Builds the full router with request tracing.
pub fn build_router(state: AppState) -> Router {
    use handlers::{health, leads, orders, quotations, reports, trainer_pos, trainers, trainings};

    Router::new()
        .route("/health", get(health::health))
        // Quotations
        .route("/api/quotations", get(quotations::list).post(quotations::create))
        .route("/api/quotations/totals", post(quotations::totals))
        .route("/api/quotations/{id}", get(quotations::get).put(quotations::update))
        .route("/api/quotations/{id}/status", patch(quotations::update_status))
        .route("/api/quotations/{id}/history", get(quotations::history))
        .route("/api/quotations/{id}/profit", get(quotations::profit))
        .route("/api/quotations/{id}/download", get(quotations::download))
        .route("/api/quotations/{id}/order", post(quotations::convert_to_order))
        // Leads & orders
        .route("/api/leads", get(leads::list).post(leads::create))
        .route("/api/orders", get(orders::list).post(orders::create))
        .route("/api/orders/{id}", get(orders::get))
        // Trainers
        .route("/api/trainers", get(trainers::list).post(trainers::create))
        .route("/api/trainers/{id}", put(trainers::update))
        .route("/api/trainer-pos", get(trainer_pos::list).post(trainer_pos::create))
        // Trainings
        .route("/api/training", post(trainings::create))
        .route("/api/trainings", get(trainings::list))
        .route("/api/training/{id}", get(trainings::get).put(trainings::update))
        .route("/api/training/{id}/details", get(trainings::details))
        .route("/api/training/{id}/po", get(trainings::purchase_order))
        // Reports
        .route("/api/reports/monthly", get(reports::monthly))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
