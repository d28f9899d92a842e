//! # Tax Calculator
//!
//! Applies GST to a subtotal and produces the financial summary that is
//! stored on every quotation and order.
//!
//! ```text
//! subtotal ──► tax = subtotal × 18% (half-up to the paisa)
//!          └─► grand_total = subtotal + tax
//! ```

use serde::Serialize;

use crate::line_item::{LineItem, QuantityPolicy};
use crate::money::{Money, Rate};
use crate::totals::compute_subtotal;

/// Goods and Services Tax applied to every quotation and order: 18%.
pub const GST_RATE: Rate = Rate::from_bps(1800);

/// Tax on a subtotal and the resulting grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSummary {
    pub tax: Money,
    pub grand_total: Money,
}

/// Subtotal, tax and grand total of a list of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub subtotal: Money,
    pub tax: Money,
    pub grand_total: Money,
}

/// Applies a single tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxCalculator {
    rate: Rate,
}

impl TaxCalculator {
    pub const fn new(rate: Rate) -> Self {
        TaxCalculator { rate }
    }

    pub const fn rate(&self) -> Rate {
        self.rate
    }

    /// ```rust
    /// use coursedesk_core::money::Money;
    /// use coursedesk_core::tax::TaxCalculator;
    ///
    /// let summary = TaxCalculator::default().apply_tax(Money::from_rupees(200));
    /// assert_eq!(summary.tax, Money::from_rupees(36));
    /// assert_eq!(summary.grand_total, Money::from_rupees(236));
    /// ```
    pub fn apply_tax(&self, subtotal: Money) -> TaxSummary {
        let tax = subtotal.apply_rate(self.rate);
        TaxSummary {
            tax,
            grand_total: subtotal + tax,
        }
    }

    /// Totalizes `items` and applies tax to the subtotal.
    pub fn summarize(&self, items: &[LineItem], policy: QuantityPolicy) -> FinancialSummary {
        let subtotal = compute_subtotal(items, policy);
        let TaxSummary { tax, grand_total } = self.apply_tax(subtotal);
        FinancialSummary {
            subtotal,
            tax,
            grand_total,
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        TaxCalculator::new(GST_RATE)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
