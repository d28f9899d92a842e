//! # coursedesk-core: Pure Business Logic for Coursedesk
//!
//! This crate is the **heart** of Coursedesk. It contains the quotation and
//! order financial model as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Coursedesk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser UI                                   │   │
//! │  │    Leads ──► Quotations ──► Orders ──► Trainer POs             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  │    handlers, PDF export, trainer emails                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ coursedesk-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  money   │ │  totals  │ │   tax    │ │  profit  │          │   │
//! │  │   │  Money   │ │ subtotal │ │ GST 18%  │ │  margin  │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  types   │ │ schedule │ │  report  │ │validation│          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                coursedesk-store (JSON files)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money in integer paise, Rate in basis points
//! - [`line_item`] - Line items, categories and lenient form parsing
//! - [`totals`] - Line totals and subtotal
//! - [`tax`] - GST and the stored financial summary
//! - [`profit`] - Cost estimation, margin and markup
//! - [`schedule`] - Inclusive day counts and PO totals
//! - [`report`] - Six-month dashboard stats
//! - [`types`] - Records (Lead, Quotation, Order, Trainer, ...)
//! - [`validation`] - Presence checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use coursedesk_core::{analyze_profit, ItemCategory, LineItem, Money, QuantityPolicy, TaxCalculator};
//!
//! let items = vec![LineItem::new(ItemCategory::LabCostPerPax, "Lab", Money::from_rupees(100), 2)];
//!
//! let summary = TaxCalculator::default().summarize(&items, QuantityPolicy::Quotation);
//! assert_eq!(summary.grand_total.to_string(), "₹236.00");
//!
//! let profit = analyze_profit(&items);
//! assert_eq!(profit.total_profit, Money::from_rupees(100));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod line_item;
pub mod money;
pub mod profit;
pub mod report;
pub mod schedule;
pub mod tax;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use line_item::{ItemCategory, LineItem, QuantityPolicy};
pub use money::{Money, Rate, CURRENCY_SYMBOL};
pub use profit::{
    analyze_profit, analyze_profit_with, CostBasis, CostRatioTable, MarginBand, ProfitBreakdown,
};
pub use report::{monthly_stats, MonthlyStat};
pub use schedule::{inclusive_days, po_total};
pub use tax::{FinancialSummary, TaxCalculator, TaxSummary, GST_RATE};
pub use totals::{
    checked_line_total, checked_subtotal, compute_line_total, compute_subtotal, totalize_items,
    ItemTotals,
};
pub use types::*;
pub use validation::validate_line_items;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Company name printed on documents and emails when none is configured.
pub const DEFAULT_COMPANY_NAME: &str = "Training Management System";
