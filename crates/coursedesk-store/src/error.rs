//! # Store Error Types
//!
//! Error types for data file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / CoreError                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in the API app) ← Mapped to an HTTP status                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Browser shows { "error": "..." }                                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use coursedesk_core::{CoreError, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found in its collection.
    ///
    /// ## When This Occurs
    /// - Updating a quotation, trainer or training by an unknown id
    /// - Converting a quotation that does not exist into an order
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Reading or writing a data file failed.
    ///
    /// ## When This Occurs
    /// - Data directory not writable
    /// - Disk full
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file does not hold the expected JSON.
    ///
    /// ## When This Occurs
    /// - File edited by hand and left malformed
    /// - Record shape from an incompatible version
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A business rule rejected the record.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
