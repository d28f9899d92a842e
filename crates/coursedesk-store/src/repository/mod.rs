//! # Repository Module
//!
//! Collection repositories for Coursedesk.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  store.quotations().update(id, patch, reason)                  │
//! │       ▼                                                                 │
//! │  QuotationRepository                                                   │
//! │  ├── read quotations.json                                              │
//! │  ├── merge patch, recompute totals (coursedesk-core)                   │
//! │  ├── write quotations.json                                             │
//! │  └── append to quotation_history.json                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  data/*.json                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`lead::LeadRepository`] - Sales leads
//! - [`quotation::QuotationRepository`] - Quotations and their edit history
//! - [`order::OrderRepository`] - Orders, including conversion from quotations
//! - [`trainer::TrainerRepository`] - Trainer records
//! - [`trainer_po::TrainerPoRepository`] - Purchase orders to trainers
//! - [`training::TrainingRepository`] - Confirmed trainings

use chrono::Utc;
use uuid::Uuid;

pub mod lead;
pub mod order;
pub mod quotation;
pub mod trainer;
pub mod trainer_po;
pub mod training;

/// Generates a new record ID.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Business number from the current time, e.g. `PO-1718000000000`.
pub fn generate_number(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().timestamp_millis())
}
