//! # Error Types
//!
//! Domain-specific error types for coursedesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  coursedesk-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input presence/format failures                 │
//! │                                                                         │
//! │  coursedesk-store errors (separate crate)                              │
//! │  └── StoreError       - Data file failures, missing records            │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - What the browser sees ({ "error": ... })       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Browser   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is NOT an error here: a missing or non-numeric cost or
//! quantity on a line item contributes zero, and a zero divisor in the
//! profit analysis yields `None`. Neither path produces a `CoreError`.

use chrono::NaiveDate;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A date range ends before it starts.
    ///
    /// ## When This Occurs
    /// - Trainer PO submitted with `endDate` before `startDate`
    /// - Training record with reversed dates reaching the day count
    #[error("Invalid date range: {end} is before {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only presence and basic format are checked; everything else the forms
/// send is accepted as-is.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., non-numeric amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// An amount, or a total derived from it, is larger than [`Money::MAX`].
    ///
    /// ## When This Occurs
    /// - Quotation or order rows whose `unitCost × quantity` or subtotal
    ///   exceeds the limit
    /// - Trainer PO or training whose day rate times days exceeds the limit
    #[error("{field} exceeds the maximum amount of {max}")]
    OutOfRange { field: String, max: Money },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
