//! # Line-Item Totalizer
//!
//! Turns an ordered list of line items into per-item totals and a subtotal.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   items ──► compute_line_total (each) ──► per_item_totals              │
//! │                       │                                                 │
//! │                       └──────────Σ──────► subtotal ──► tax module      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contribution Rules
//! | unit_cost        | quantity          | Quotation | Order        |
//! |------------------|-------------------|-----------|--------------|
//! | missing/negative | any               | 0         | 0            |
//! | c ≥ 0            | missing           | 0         | 0            |
//! | c ≥ 0            | q < 1             | 0         | c × 1        |
//! | c ≥ 0            | q ≥ 1             | c × q     | c × q        |
//! | c × q beyond `Money::MAX`            || 0         | 0            |
//!
//! Amounts are integer paise, so sums are exact and there is no
//! intermediate rounding. Callers that persist totals check the items with
//! [`checked_subtotal`] first and reject out-of-range rows instead of
//! silently dropping them.

use serde::Serialize;

use crate::line_item::{LineItem, QuantityPolicy};
use crate::money::Money;

/// Per-item totals alongside their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTotals {
    /// One entry per input item, in input order.
    pub per_item_totals: Vec<Money>,
    pub subtotal: Money,
}

/// Computes a single line total.
///
/// ```rust
/// use coursedesk_core::line_item::QuantityPolicy;
/// use coursedesk_core::money::Money;
/// use coursedesk_core::totals::compute_line_total;
///
/// let total = compute_line_total(Some(Money::from_rupees(100)), Some(2), QuantityPolicy::Quotation);
/// assert_eq!(total, Money::from_rupees(200));
///
/// // Orders never count a row less than once
/// let total = compute_line_total(Some(Money::from_rupees(100)), Some(0), QuantityPolicy::Order);
/// assert_eq!(total, Money::from_rupees(100));
/// ```
pub fn compute_line_total(
    unit_cost: Option<Money>,
    quantity: Option<i64>,
    policy: QuantityPolicy,
) -> Money {
    checked_line_total(unit_cost, quantity, policy).unwrap_or_default()
}

/// Like [`compute_line_total`], but `None` when `unit_cost × quantity`
/// leaves the `Money::MAX` range.
pub fn checked_line_total(
    unit_cost: Option<Money>,
    quantity: Option<i64>,
    policy: QuantityPolicy,
) -> Option<Money> {
    let (Some(cost), Some(qty)) = (unit_cost, quantity) else {
        return Some(Money::zero());
    };
    if cost.is_negative() {
        return Some(Money::zero());
    }

    let qty = match policy {
        QuantityPolicy::Order => qty.max(1),
        QuantityPolicy::Quotation if qty < 1 => return Some(Money::zero()),
        QuantityPolicy::Quotation => qty,
    };

    cost.checked_mul_quantity(qty)
}

/// Sums the line totals of `items`. An empty list sums to zero.
pub fn compute_subtotal(items: &[LineItem], policy: QuantityPolicy) -> Money {
    items.iter().map(|item| item.line_total(policy)).sum()
}

/// Sums the line totals of `items`; `None` when any row or the running
/// sum leaves the `Money::MAX` range.
pub fn checked_subtotal(items: &[LineItem], policy: QuantityPolicy) -> Option<Money> {
    items.iter().try_fold(Money::zero(), |sum, item| {
        sum.checked_add(checked_line_total(item.unit_cost, item.quantity, policy)?)
    })
}

/// Computes per-item totals and their subtotal in one pass.
pub fn totalize_items(items: &[LineItem], policy: QuantityPolicy) -> ItemTotals {
    let per_item_totals: Vec<Money> = items.iter().map(|item| item.line_total(policy)).collect();
    let subtotal = per_item_totals.iter().sum();

    ItemTotals {
        per_item_totals,
        subtotal,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::ItemCategory;

    fn item(category: ItemCategory, rupees: i64, qty: i64) -> LineItem {
        LineItem::new(category, "", Money::from_rupees(rupees), qty)
    }

    #[test]
    fn test_line_total_is_cost_times_quantity() {
        for (cost, qty) in [(0, 1), (1, 1), (100, 2), (500, 3), (12_345, 17)] {
            let total = compute_line_total(
                Some(Money::from_paise(cost)),
                Some(qty),
                QuantityPolicy::Quotation,
            );
            assert_eq!(total.paise(), cost * qty);
        }
    }

    #[test]
    fn test_missing_inputs_contribute_zero() {
        for policy in [QuantityPolicy::Quotation, QuantityPolicy::Order] {
            assert!(compute_line_total(None, Some(2), policy).is_zero());
            assert!(compute_line_total(Some(Money::from_rupees(10)), None, policy).is_zero());
            assert!(compute_line_total(None, None, policy).is_zero());
        }
    }

    #[test]
    fn test_negative_cost_contributes_zero() {
        let total =
            compute_line_total(Some(Money::from_rupees(-10)), Some(2), QuantityPolicy::Order);
        assert!(total.is_zero());
    }

    #[test]
    fn test_quantity_below_one_depends_on_policy() {
        let cost = Some(Money::from_rupees(40));

        assert!(compute_line_total(cost, Some(0), QuantityPolicy::Quotation).is_zero());
        assert!(compute_line_total(cost, Some(-3), QuantityPolicy::Quotation).is_zero());

        let forty = Money::from_rupees(40);
        assert_eq!(compute_line_total(cost, Some(0), QuantityPolicy::Order), forty);
        assert_eq!(compute_line_total(cost, Some(-3), QuantityPolicy::Order), forty);
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals() {
        let items = vec![
            item(ItemCategory::LabCostPerPax, 100, 2),
            item(ItemCategory::TrainerCost, 500, 3),
            item(ItemCategory::Other, 7, 0),
        ];

        let expected: Money = items
            .iter()
            .map(|i| compute_line_total(i.unit_cost, i.quantity, QuantityPolicy::Quotation))
            .sum();
        assert_eq!(compute_subtotal(&items, QuantityPolicy::Quotation), expected);
        assert_eq!(expected, Money::from_rupees(1_700));
    }

    #[test]
    fn test_empty_subtotal_is_zero() {
        assert!(compute_subtotal(&[], QuantityPolicy::Quotation).is_zero());

        let totals = totalize_items(&[], QuantityPolicy::Order);
        assert!(totals.per_item_totals.is_empty());
        assert!(totals.subtotal.is_zero());
    }

    #[test]
    fn test_totalize_keeps_input_order() {
        let items = vec![
            item(ItemCategory::TrainerCost, 500, 3),
            item(ItemCategory::LabCostPerPax, 100, 2),
        ];
        let totals = totalize_items(&items, QuantityPolicy::Quotation);

        assert_eq!(
            totals.per_item_totals,
            vec![Money::from_rupees(1_500), Money::from_rupees(200)]
        );
        assert_eq!(totals.subtotal, Money::from_rupees(1_700));
    }

    #[test]
    fn test_oversized_line_contributes_zero_without_panicking() {
        let big = Money::from_rupees(1_000_000_000_000);
        let items = vec![
            LineItem::new(ItemCategory::Other, "", big, 10_000_000_000),
            item(ItemCategory::LabCostPerPax, 100, 2),
        ];

        for policy in [QuantityPolicy::Quotation, QuantityPolicy::Order] {
            let totals = totalize_items(&items, policy);
            assert_eq!(totals.per_item_totals, vec![Money::zero(), Money::from_rupees(200)]);
            assert_eq!(totals.subtotal, Money::from_rupees(200));
            assert_eq!(checked_subtotal(&items, policy), None);
        }
    }

    #[test]
    fn test_checked_subtotal_rejects_overflowing_sum() {
        let max_row = LineItem::new(ItemCategory::Other, "", Money::MAX, 1);
        assert_eq!(
            checked_subtotal(&[max_row.clone()], QuantityPolicy::Quotation),
            Some(Money::MAX)
        );
        assert_eq!(
            checked_subtotal(&[max_row.clone(), max_row], QuantityPolicy::Quotation),
            None
        );

        let items = vec![item(ItemCategory::TrainerCost, 500, 3), item(ItemCategory::Other, 7, 0)];
        assert_eq!(
            checked_subtotal(&items, QuantityPolicy::Quotation),
            Some(compute_subtotal(&items, QuantityPolicy::Quotation))
        );
    }

    #[test]
    fn test_totalize_is_idempotent() {
        let items = vec![item(ItemCategory::AssessmentNoProctoring, 333, 3)];
        let first = totalize_items(&items, QuantityPolicy::Quotation);
        let second = totalize_items(&items, QuantityPolicy::Quotation);
        assert_eq!(first, second);
    }
}
