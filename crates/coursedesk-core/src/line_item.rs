//! # Line Items
//!
//! A quotation or order is an ordered list of line items. Each item carries a
//! category, a free-text description, a unit cost and a quantity.
//!
//! ## Lenient Input
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Browser form value            →  LineItem field                        │
//! │  ──────────────────────────────────────────────────────────────────     │
//! │  "unitCost": 100 / "100.50"    →  unit_cost: Some(Money)                │
//! │  "unitCost": "" / "abc" / null →  unit_cost: None   (contributes 0)     │
//! │  "quantity": 2 / "2" / 2.0     →  quantity: Some(2)                     │
//! │  "quantity": "" / "x" / 1.5    →  quantity: None    (contributes 0)     │
//! │  "quantity" absent             →  quantity: Some(1)                     │
//! │  "category": "Banana" / ""     →  category: Other                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The line total is never stored on the item. It is derived through
//! [`crate::totals::compute_line_total`] each time it is needed.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::money::Money;
use crate::totals::compute_line_total;

// =============================================================================
// Item Category
// =============================================================================

/// The kind of cost a line item represents.
///
/// Wire labels are the option values of the quotation form. Any label not
/// listed here, including an empty selection, reads back as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemCategory {
    #[serde(rename = "Trainer Cost")]
    TrainerCost,
    #[serde(rename = "Assessment without Proctoring")]
    AssessmentNoProctoring,
    #[serde(rename = "Assessment with Proctoring")]
    AssessmentWithProctoring,
    #[serde(rename = "Lab Cost per pax per day")]
    LabCostPerPax,
    #[serde(rename = "Lab Assessment per pax")]
    LabAssessmentPerPax,
    #[default]
    #[serde(other)]
    Other,
}

impl ItemCategory {
    /// Every category, in form order.
    pub const ALL: [ItemCategory; 6] = [
        ItemCategory::TrainerCost,
        ItemCategory::AssessmentNoProctoring,
        ItemCategory::AssessmentWithProctoring,
        ItemCategory::LabCostPerPax,
        ItemCategory::LabAssessmentPerPax,
        ItemCategory::Other,
    ];

    /// Returns the label shown on forms and documents.
    pub const fn label(&self) -> &'static str {
        match self {
            ItemCategory::TrainerCost => "Trainer Cost",
            ItemCategory::AssessmentNoProctoring => "Assessment without Proctoring",
            ItemCategory::AssessmentWithProctoring => "Assessment with Proctoring",
            ItemCategory::LabCostPerPax => "Lab Cost per pax per day",
            ItemCategory::LabAssessmentPerPax => "Lab Assessment per pax",
            ItemCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Quantity Policy
// =============================================================================

/// How a quantity below one is treated when computing a line total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityPolicy {
    /// Quotation rows start at quantity 0 before a category is chosen;
    /// such rows contribute nothing.
    Quotation,
    /// Order rows always count at least once: quantities below 1 become 1.
    Order,
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of a quotation or order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub category: ItemCategory,

    #[serde(default)]
    pub description: String,

    /// Price per unit; `None` when the form sent nothing usable.
    #[serde(default, deserialize_with = "lenient_money")]
    pub unit_cost: Option<Money>,

    /// Number of units; `Some(1)` when the field is absent entirely.
    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: Option<i64>,
}

impl LineItem {
    /// Creates a fully-specified line item.
    pub fn new(
        category: ItemCategory,
        description: impl Into<String>,
        unit_cost: Money,
        quantity: i64,
    ) -> Self {
        LineItem {
            category,
            description: description.into(),
            unit_cost: Some(unit_cost),
            quantity: Some(quantity),
        }
    }

    /// Derived `unit_cost × quantity` under the given policy.
    #[inline]
    pub fn line_total(&self, policy: QuantityPolicy) -> Money {
        compute_line_total(self.unit_cost, self.quantity, policy)
    }
}

fn default_quantity() -> Option<i64> {
    Some(1)
}

// =============================================================================
// Lenient Deserializers
// =============================================================================

fn lenient_money<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(money_from_value))
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(quantity_from_value))
}

fn money_from_value(value: &Value) -> Option<Money> {
    match value {
        Value::Number(n) => n.as_f64().and_then(Money::from_decimal),
        Value::String(s) => Money::parse(s).ok(),
        _ => None,
    }
}

fn quantity_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
        _ => None,
    }
}

fn whole_number(x: f64) -> Option<i64> {
    if x.is_finite() && x.fract() == 0.0 {
        Some(x as i64)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
