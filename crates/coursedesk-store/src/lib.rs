//! # coursedesk-store: Flat JSON File Store for Coursedesk
//!
//! This crate persists Coursedesk records as one JSON array per collection
//! in a data directory.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Coursedesk Data Flow                             │
//! │                                                                         │
//! │  HTTP handler (POST /api/quotations)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 coursedesk-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │   JsonFile   │  │   │
//! │  │   │  (store.rs)   │    │ (repository/) │    │(json_file.rs)│  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ data dir      │───►│ LeadRepo      │───►│ read_all     │  │   │
//! │  │   │ bootstrap     │    │ QuotationRepo │    │ write_all    │  │   │
//! │  │   │               │    │ OrderRepo ... │    │ append       │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     ./data/*.json                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Data directory bootstrap and repository access
//! - [`json_file`] - Typed read/write of one collection file
//! - [`error`] - Store error types
//! - [`repository`] - Repository implementations (lead, quotation, etc.)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use coursedesk_store::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::new("./data")).await?;
//!
//! let quotations = store.quotations().list(Some("lead-id")).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod json_file;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use json_file::JsonFile;
pub use store::{Collection, Store, StoreConfig};

// Repository re-exports for convenience
pub use repository::lead::LeadRepository;
pub use repository::order::OrderRepository;
pub use repository::quotation::QuotationRepository;
pub use repository::trainer::TrainerRepository;
pub use repository::trainer_po::TrainerPoRepository;
pub use repository::training::TrainingRepository;
