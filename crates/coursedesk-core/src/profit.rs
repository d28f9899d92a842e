//! # Profit Analysis
//!
//! Estimates what a quotation costs the business and how much it earns.
//!
//! ## Cost Estimation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category                        Cost basis                             │
//! │  ─────────────────────────────   ─────────────────────────────────────  │
//! │  Trainer Cost                    recorded: unit_cost × quantity         │
//! │  Assessment without Proctoring   60% of line total                      │
//! │  Assessment with Proctoring      70% of line total                      │
//! │  Lab Cost per pax per day        50% of line total                      │
//! │  Lab Assessment per pax          55% of line total                      │
//! │  Other / anything else           65% of line total                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Trainer cost is passed through as recorded, so a trainer row always shows
//! zero profit at list price. Every other category is priced with a markup
//! whose cost share comes from the table.
//!
//! Margins are `None` when their divisor is zero and serialize as `null`.

use serde::Serialize;

use crate::line_item::{ItemCategory, LineItem, QuantityPolicy};
use crate::money::{Money, Rate};
use crate::tax::TaxCalculator;
use crate::totals::compute_line_total;

/// Cost share used for any category without an explicit entry: 65%.
pub const DEFAULT_COST_RATIO: Rate = Rate::from_bps(6500);

/// Margin at or above which a quotation is considered healthy.
pub const HEALTHY_MARGIN_PCT: f64 = 30.0;

/// Margin at or above which a quotation is considered fair.
pub const FAIR_MARGIN_PCT: f64 = 20.0;

// =============================================================================
// Cost Ratio Table
// =============================================================================

/// How the cost of a line item is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostBasis {
    /// Cost is the recorded `unit_cost × quantity`, with the same zeroing
    /// of missing, negative or below-one inputs as the line total.
    RecordedCost,
    /// Cost is a share of the line total.
    PriceRatio(Rate),
}

/// Lookup table from category to cost basis.
#[derive(Debug, Clone)]
pub struct CostRatioTable {
    entries: Vec<(ItemCategory, CostBasis)>,
    fallback: CostBasis,
}

impl CostRatioTable {
    /// Creates an empty table where every category uses `fallback`.
    pub fn new(fallback: CostBasis) -> Self {
        CostRatioTable {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Sets the basis for one category, replacing any earlier entry.
    pub fn with(mut self, category: ItemCategory, basis: CostBasis) -> Self {
        self.entries.retain(|(c, _)| *c != category);
        self.entries.push((category, basis));
        self
    }

    pub fn basis_for(&self, category: ItemCategory) -> CostBasis {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, basis)| *basis)
            .unwrap_or(self.fallback)
    }

    /// Estimates the cost of one item given its line total.
    pub fn estimate_cost(&self, item: &LineItem, line_total: Money) -> Money {
        match self.basis_for(item.category) {
            CostBasis::RecordedCost => recorded_cost(item),
            CostBasis::PriceRatio(rate) => line_total.apply_rate(rate),
        }
    }
}

impl Default for CostRatioTable {
    fn default() -> Self {
        CostRatioTable::new(CostBasis::PriceRatio(DEFAULT_COST_RATIO))
            .with(ItemCategory::TrainerCost, CostBasis::RecordedCost)
            .with(
                ItemCategory::AssessmentNoProctoring,
                CostBasis::PriceRatio(Rate::from_bps(6000)),
            )
            .with(
                ItemCategory::AssessmentWithProctoring,
                CostBasis::PriceRatio(Rate::from_bps(7000)),
            )
            .with(
                ItemCategory::LabCostPerPax,
                CostBasis::PriceRatio(Rate::from_bps(5000)),
            )
            .with(
                ItemCategory::LabAssessmentPerPax,
                CostBasis::PriceRatio(Rate::from_bps(5500)),
            )
    }
}

/// Unit cost times quantity as entered. Inputs that contribute nothing to
/// the price contribute nothing to the cost either.
fn recorded_cost(item: &LineItem) -> Money {
    compute_line_total(item.unit_cost, item.quantity, QuantityPolicy::Quotation)
}

// =============================================================================
// Margin Band
// =============================================================================

/// Traffic-light classification of a profit margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarginBand {
    /// 30% or more.
    Healthy,
    /// At least 20% but under 30%.
    Fair,
    /// Under 20%, including losses.
    Low,
    /// No margin could be computed (zero price).
    Undefined,
}

impl MarginBand {
    pub fn classify(margin_pct: Option<f64>) -> Self {
        match margin_pct {
            None => MarginBand::Undefined,
            Some(m) if m >= HEALTHY_MARGIN_PCT => MarginBand::Healthy,
            Some(m) if m >= FAIR_MARGIN_PCT => MarginBand::Fair,
            Some(_) => MarginBand::Low,
        }
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// Cost and profit of one line item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProfit {
    pub category: ItemCategory,
    pub description: String,
    pub price: Money,
    pub estimated_cost: Money,
    pub profit: Money,
}

/// Full profit view of a quotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitBreakdown {
    pub items: Vec<ItemProfit>,
    pub total_price: Money,
    pub total_cost: Money,
    pub total_profit: Money,
    pub tax: Money,
    pub total_with_tax: Money,
    /// `total_profit / total_price × 100`; `None` when price is zero.
    pub profit_margin_pct: Option<f64>,
    /// `total_profit / total_cost × 100`; `None` when cost is zero.
    pub markup_pct: Option<f64>,
    pub margin_band: MarginBand,
}

impl ProfitBreakdown {
    /// Progress toward the healthy-margin target, capped at 100.
    pub fn target_progress_pct(&self) -> f64 {
        match self.profit_margin_pct {
            Some(m) => (m / HEALTHY_MARGIN_PCT * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        }
    }
}

/// Analyzes `items` with the default cost table and GST.
///
/// ```rust
/// use coursedesk_core::line_item::{ItemCategory, LineItem};
/// use coursedesk_core::money::Money;
/// use coursedesk_core::profit::analyze_profit;
///
/// let items = vec![LineItem::new(ItemCategory::LabCostPerPax, "Lab", Money::from_rupees(100), 2)];
/// let breakdown = analyze_profit(&items);
/// assert_eq!(breakdown.total_cost, Money::from_rupees(100));
/// assert_eq!(breakdown.profit_margin_pct, Some(50.0));
/// ```
pub fn analyze_profit(items: &[LineItem]) -> ProfitBreakdown {
    analyze_profit_with(items, &CostRatioTable::default(), &TaxCalculator::default())
}

/// Analyzes `items` with an explicit cost table and tax calculator.
pub fn analyze_profit_with(
    items: &[LineItem],
    table: &CostRatioTable,
    tax: &TaxCalculator,
) -> ProfitBreakdown {
    let item_profits: Vec<ItemProfit> = items
        .iter()
        .map(|item| {
            let price = item.line_total(QuantityPolicy::Quotation);
            let estimated_cost = table.estimate_cost(item, price);
            ItemProfit {
                category: item.category,
                description: item.description.clone(),
                price,
                estimated_cost,
                profit: price - estimated_cost,
            }
        })
        .collect();

    let total_price: Money = item_profits.iter().map(|p| p.price).sum();
    let total_cost: Money = item_profits.iter().map(|p| p.estimated_cost).sum();
    let total_profit = total_price - total_cost;
    let summary = tax.apply_tax(total_price);
    let profit_margin_pct = total_profit.percent_of(total_price);

    ProfitBreakdown {
        items: item_profits,
        total_price,
        total_cost,
        total_profit,
        tax: summary.tax,
        total_with_tax: summary.grand_total,
        profit_margin_pct,
        markup_pct: total_profit.percent_of(total_cost),
        margin_band: MarginBand::classify(profit_margin_pct),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
