//! # Validation Module
//!
//! Presence checks for incoming records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser form                                                 │
//! │  └── `required` attributes, number inputs                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: HTTP handler (Rust)                                          │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: required text, non-negative amounts                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Line-item math                                               │
//! │  ├── Unusable costs/quantities contribute zero instead of failing      │
//! │  └── Totals beyond Money::MAX are rejected before they are stored      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deeper checks (email syntax, phone formats, duplicate numbers) are
//! deliberately absent.

use crate::error::ValidationError;
use crate::line_item::{LineItem, QuantityPolicy};
use crate::money::Money;
use crate::totals::checked_subtotal;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fails when `value` is empty or whitespace only.
///
/// ```rust
/// use coursedesk_core::validation::validate_required;
///
/// assert!(validate_required("clientName", "Acme Corp").is_ok());
/// assert!(validate_required("clientName", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Fails when `amount` is below zero.
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Fails when any line total, or the subtotal, exceeds [`Money::MAX`].
pub fn validate_line_items(
    field: &str,
    items: &[LineItem],
    policy: QuantityPolicy,
) -> ValidationResult<()> {
    checked_subtotal(items, policy)
        .map(|_| ())
        .ok_or_else(|| out_of_range(field))
}

/// `OutOfRange` error for `field` at the [`Money::MAX`] limit.
pub fn out_of_range(field: &str) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        max: Money::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::ItemCategory;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Priya").is_ok());
        assert!(validate_required("name", " x ").is_ok());

        let err = validate_required("name", "").unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "name"));
        assert!(validate_required("name", "\t\n").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("dailyRate", Money::zero()).is_ok());
        assert!(validate_amount("dailyRate", Money::from_rupees(8_000)).is_ok());
        assert!(matches!(
            validate_amount("dailyRate", Money::from_paise(-1)),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
    }

    #[test]
    fn test_validate_line_items() {
        let fine = vec![LineItem::new(ItemCategory::LabCostPerPax, "", Money::from_rupees(100), 2)];
        assert!(validate_line_items("items", &fine, QuantityPolicy::Quotation).is_ok());
        assert!(validate_line_items("items", &[], QuantityPolicy::Order).is_ok());

        let huge = vec![LineItem::new(
            ItemCategory::Other,
            "",
            Money::from_rupees(1_000_000_000_000),
            10_000_000_000,
        )];
        assert!(matches!(
            validate_line_items("items", &huge, QuantityPolicy::Quotation),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "items"
        ));
    }
}
