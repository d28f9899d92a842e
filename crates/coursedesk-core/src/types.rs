//! # Domain Types
//!
//! Records kept by Coursedesk and the inputs that create or change them.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────┐  lead_id  ┌──────────────┐ quotation_id ┌──────────┐ │
//! │  │    Lead      │◄──────────│  Quotation   │◄─────────────│  Order   │ │
//! │  │ lead_number  │           │ items        │              │ items    │ │
//! │  │ status       │           │ subtotal/gst │              │ totals   │ │
//! │  └──────────────┘           │ /total       │              └────▲─────┘ │
//! │                             └──────┬───────┘                   │       │
//! │                                    │ quotation_id     order_id │       │
//! │                             ┌──────▼───────┐  trainer_id ┌─────┴─────┐ │
//! │                             │QuotationEdit │   ┌─────────│ TrainerPo │ │
//! │                             └──────────────┘   │         └───────────┘ │
//! │                                         ┌──────▼───────┐               │
//! │  ┌──────────────┐                       │   Trainer    │               │
//! │  │   Training   │  (standalone)         │ daily_rate   │               │
//! │  │ costs/prices │                       └──────────────┘               │
//! │  └──────────────┘                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every record has:
//! - `id`: UUID v4 string, assigned by the store
//! - A business number where the form supplies one (`QT-…`, `ORD-…`, `PO-…`)
//!
//! ## Record / New / Patch
//! - `Xxx`: the persisted record
//! - `NewXxx`: what a create request carries (no id, no timestamps)
//! - `XxxPatch`: a partial update; only present fields are merged

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::line_item::{LineItem, QuantityPolicy};
use crate::money::Money;
use crate::schedule::inclusive_days;
use crate::tax::TaxCalculator;
use crate::validation::{
    out_of_range, validate_amount, validate_line_items, validate_required, ValidationResult,
};

/// Editor recorded on every quotation history entry.
pub const SYSTEM_EDITOR: &str = "System User";

// =============================================================================
// Statuses
// =============================================================================

/// Sales pipeline stage of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

/// Customer decision on a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuotationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

/// Whether a trainer is currently offered work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrainerStatus {
    #[default]
    Active,
    Inactive,
}

/// Trainer response to a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PoStatus {
    #[default]
    Pending,
    Accepted,
    Cancelled,
}

/// State of a confirmed training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrainingStatus {
    #[default]
    Confirmed,
    Completed,
    Cancelled,
}

// =============================================================================
// Lead
// =============================================================================

/// A prospective client enquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    #[serde(default)]
    pub lead_number: String,
    pub date: Option<NaiveDate>,
    pub company_name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub course: String,
    pub participants: Option<u32>,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    #[serde(default)]
    pub lead_number: String,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub course: String,
    pub participants: Option<u32>,
    #[serde(default)]
    pub requirements: String,
    pub status: Option<LeadStatus>,
}

impl NewLead {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("companyName", &self.company_name)
    }

    pub fn into_lead(self, id: String, now: DateTime<Utc>) -> Lead {
        Lead {
            id,
            lead_number: self.lead_number,
            date: self.date,
            company_name: self.company_name,
            contact_person: self.contact_person,
            email: self.email,
            phone: self.phone,
            course: self.course,
            participants: self.participants,
            requirements: self.requirements,
            status: self.status.unwrap_or_default(),
            created_at: now,
        }
    }
}

// =============================================================================
// Quotation
// =============================================================================

/// A priced offer to a client.
///
/// `subtotal`, `gst` and `total` are a snapshot of the items at the last
/// save. They are recomputed by [`Quotation::recompute_totals`] whenever the
/// store writes a quotation, never trusted from the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    pub id: String,
    #[serde(default)]
    pub quotation_number: String,
    pub date: Option<NaiveDate>,
    pub lead_id: Option<String>,
    pub client_name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub subtotal: Money,
    #[serde(default)]
    pub gst: Money,
    #[serde(default)]
    pub total: Money,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: QuotationStatus,
    pub last_modified: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Quotation {
    /// Refreshes `subtotal`, `gst` and `total` from the items.
    pub fn recompute_totals(&mut self, tax: &TaxCalculator) {
        let summary = tax.summarize(&self.items, QuantityPolicy::Quotation);
        self.subtotal = summary.subtotal;
        self.gst = summary.tax;
        self.total = summary.grand_total;
    }

    /// Merges the present fields of `patch` into this quotation.
    pub fn apply_patch(&mut self, patch: QuotationPatch) {
        if let Some(v) = patch.quotation_number {
            self.quotation_number = v;
        }
        if let Some(v) = patch.date {
            self.date = Some(v);
        }
        if let Some(v) = patch.lead_id {
            self.lead_id = Some(v);
        }
        if let Some(v) = patch.client_name {
            self.client_name = v;
        }
        if let Some(v) = patch.contact_person {
            self.contact_person = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.items {
            self.items = v;
        }
        if let Some(v) = patch.notes {
            self.notes = Some(v);
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuotation {
    #[serde(default)]
    pub quotation_number: String,
    pub date: Option<NaiveDate>,
    pub lead_id: Option<String>,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub notes: Option<String>,
}

impl NewQuotation {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("clientName", &self.client_name)?;
        validate_line_items("items", &self.items, QuantityPolicy::Quotation)
    }

    /// Builds a pending quotation with totals computed from the items.
    pub fn into_quotation(self, id: String, now: DateTime<Utc>, tax: &TaxCalculator) -> Quotation {
        let mut quotation = Quotation {
            id,
            quotation_number: self.quotation_number,
            date: self.date,
            lead_id: self.lead_id.filter(|l| !l.is_empty()),
            client_name: self.client_name,
            contact_person: self.contact_person,
            email: self.email,
            phone: self.phone,
            items: self.items,
            subtotal: Money::zero(),
            gst: Money::zero(),
            total: Money::zero(),
            notes: self.notes,
            status: QuotationStatus::Pending,
            last_modified: None,
            created_at: now,
        };
        quotation.recompute_totals(tax);
        quotation
    }
}

/// Partial update of a quotation. Totals are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotation_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuotationStatus>,
}

impl QuotationPatch {
    /// Checks replacement items, when the patch carries any.
    pub fn validate(&self) -> ValidationResult<()> {
        match &self.items {
            Some(items) => validate_line_items("items", items, QuantityPolicy::Quotation),
            None => Ok(()),
        }
    }
}

/// One entry of a quotation's edit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationEdit {
    pub quotation_id: String,
    pub date: DateTime<Utc>,
    pub reason: Option<String>,
    pub editor: String,
    /// The fields submitted with the edit.
    pub changes: serde_json::Value,
}

// =============================================================================
// Order
// =============================================================================

/// A confirmed purchase, usually converted from an approved quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    pub order_date: Option<NaiveDate>,
    pub client_name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub quotation_id: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub subtotal: Money,
    #[serde(default)]
    pub gst: Money,
    #[serde(default)]
    pub total: Money,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Refreshes `subtotal`, `gst` and `total` from the items.
    pub fn recompute_totals(&mut self, tax: &TaxCalculator) {
        let summary = tax.summarize(&self.items, QuantityPolicy::Order);
        self.subtotal = summary.subtotal;
        self.gst = summary.tax;
        self.total = summary.grand_total;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(default)]
    pub order_number: String,
    pub order_date: Option<NaiveDate>,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub quotation_id: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub status: Option<OrderStatus>,
}

impl NewOrder {
    /// Pre-fills an order from a quotation.
    ///
    /// Each quotation row becomes one order row priced at the quotation's
    /// line total with quantity 1, so the order subtotal equals the
    /// quotation subtotal.
    pub fn from_quotation(
        quotation: &Quotation,
        order_number: impl Into<String>,
        order_date: NaiveDate,
    ) -> Self {
        let items = quotation
            .items
            .iter()
            .map(|item| LineItem {
                category: item.category,
                description: item.description.clone(),
                unit_cost: Some(item.line_total(QuantityPolicy::Quotation)),
                quantity: Some(1),
            })
            .collect();

        NewOrder {
            order_number: order_number.into(),
            order_date: Some(order_date),
            client_name: quotation.client_name.clone(),
            contact_person: quotation.contact_person.clone(),
            email: quotation.email.clone(),
            phone: quotation.phone.clone(),
            quotation_id: Some(quotation.id.clone()),
            items,
            status: None,
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("clientName", &self.client_name)?;
        validate_line_items("items", &self.items, QuantityPolicy::Order)
    }

    /// Builds the order with totals computed from the items.
    pub fn into_order(self, id: String, now: DateTime<Utc>, tax: &TaxCalculator) -> Order {
        let mut order = Order {
            id,
            order_number: self.order_number,
            order_date: self.order_date,
            client_name: self.client_name,
            contact_person: self.contact_person,
            email: self.email,
            phone: self.phone,
            quotation_id: self.quotation_id.filter(|q| !q.is_empty()),
            items: self.items,
            subtotal: Money::zero(),
            gst: Money::zero(),
            total: Money::zero(),
            status: self.status.unwrap_or_default(),
            created_at: now,
        };
        order.recompute_totals(tax);
        order
    }
}

// =============================================================================
// Trainer
// =============================================================================

/// A freelance trainer the business can contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub expertise: String,
    #[serde(default)]
    pub daily_rate: Money,
    #[serde(default)]
    pub status: TrainerStatus,
    pub notes: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Trainer {
    pub fn apply_patch(&mut self, patch: TrainerPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.expertise {
            self.expertise = v;
        }
        if let Some(v) = patch.daily_rate {
            self.daily_rate = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.notes {
            self.notes = Some(v);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrainer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub expertise: String,
    #[serde(default)]
    pub daily_rate: Money,
    pub status: Option<TrainerStatus>,
    pub notes: Option<String>,
}

impl NewTrainer {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("name", &self.name)?;
        validate_required("email", &self.email)?;
        validate_amount("dailyRate", self.daily_rate)
    }

    pub fn into_trainer(self, id: String, now: DateTime<Utc>) -> Trainer {
        Trainer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            expertise: self.expertise,
            daily_rate: self.daily_rate,
            status: self.status.unwrap_or_default(),
            notes: self.notes,
            last_modified: None,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub expertise: Option<String>,
    pub daily_rate: Option<Money>,
    pub status: Option<TrainerStatus>,
    pub notes: Option<String>,
}

// =============================================================================
// Trainer Purchase Order
// =============================================================================

/// A purchase order issued to a trainer for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerPo {
    pub id: String,
    /// `PO-<unix millis>` at creation time.
    pub po_number: String,
    pub po_date: Option<NaiveDate>,
    pub order_id: Option<String>,
    pub trainer_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_rate: Money,
    /// `inclusive_days(start, end) × daily_rate`.
    pub total_amount: Money,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: PoStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrainerPo {
    pub po_date: Option<NaiveDate>,
    pub order_id: Option<String>,
    #[serde(default)]
    pub trainer_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_rate: Money,
    pub notes: Option<String>,
}

impl NewTrainerPo {
    pub fn validate(&self) -> CoreResult<()> {
        validate_required("trainerId", &self.trainer_id)?;
        validate_amount("dailyRate", self.daily_rate)?;
        inclusive_days(self.start_date, self.end_date)?;
        Ok(())
    }
}

// =============================================================================
// Training
// =============================================================================

/// Per-day amounts for the three components of a training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRates {
    #[serde(default)]
    pub trainer_per_day: Money,
    #[serde(default)]
    pub lab_per_day: Money,
    #[serde(default)]
    pub platform_per_day: Money,
}

impl DailyRates {
    /// Sum of the three per-day amounts.
    pub fn per_day(&self) -> Money {
        self.trainer_per_day + self.lab_per_day + self.platform_per_day
    }

    /// Per-day sum times `days`; fails beyond `Money::MAX`.
    pub fn over_days(&self, days: i64, field: &str) -> CoreResult<Money> {
        Ok(self
            .per_day()
            .checked_mul_quantity(days)
            .ok_or_else(|| out_of_range(field))?)
    }
}

/// A confirmed training engagement with its cost and sale prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub id: String,
    pub client_name: String,
    #[serde(default)]
    pub training_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub trainer: String,
    pub trainer_email: Option<String>,
    #[serde(default)]
    pub costs: DailyRates,
    #[serde(default)]
    pub prices: DailyRates,
    #[serde(default)]
    pub status: TrainingStatus,
    pub created_at: DateTime<Utc>,
}

impl Training {
    pub fn days(&self) -> CoreResult<i64> {
        inclusive_days(self.start_date, self.end_date)
    }

    /// Sale value over the whole date range.
    pub fn revenue(&self) -> CoreResult<Money> {
        self.prices.over_days(self.days()?, "prices")
    }

    /// Cost over the whole date range.
    pub fn cost(&self) -> CoreResult<Money> {
        self.costs.over_days(self.days()?, "costs")
    }

    pub fn profit(&self) -> CoreResult<Money> {
        Ok(self.revenue()? - self.cost()?)
    }

    pub fn apply_patch(&mut self, patch: TrainingPatch) {
        if let Some(v) = patch.client_name {
            self.client_name = v;
        }
        if let Some(v) = patch.training_type {
            self.training_type = v;
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(v) = patch.trainer {
            self.trainer = v;
        }
        if let Some(v) = patch.trainer_email {
            self.trainer_email = Some(v);
        }
        if let Some(v) = patch.costs {
            self.costs = v;
        }
        if let Some(v) = patch.prices {
            self.prices = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTraining {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub training_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub trainer: String,
    pub trainer_email: Option<String>,
    #[serde(default)]
    pub costs: DailyRates,
    #[serde(default)]
    pub prices: DailyRates,
}

impl NewTraining {
    pub fn validate(&self) -> CoreResult<()> {
        validate_required("clientName", &self.client_name)?;
        let days = inclusive_days(self.start_date, self.end_date)?;
        self.costs.over_days(days, "costs")?;
        self.prices.over_days(days, "prices")?;
        Ok(())
    }

    /// Builds the training; new trainings are always `Confirmed`.
    pub fn into_training(self, id: String, now: DateTime<Utc>) -> Training {
        Training {
            id,
            client_name: self.client_name,
            training_type: self.training_type,
            start_date: self.start_date,
            end_date: self.end_date,
            trainer: self.trainer,
            trainer_email: self.trainer_email.filter(|e| !e.is_empty()),
            costs: self.costs,
            prices: self.prices,
            status: TrainingStatus::Confirmed,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPatch {
    pub client_name: Option<String>,
    pub training_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub trainer: Option<String>,
    pub trainer_email: Option<String>,
    pub costs: Option<DailyRates>,
    pub prices: Option<DailyRates>,
    pub status: Option<TrainingStatus>,
}

/// The subset of a training shown on its detail card and PO.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDetails {
    pub id: String,
    pub client_name: String,
    pub training_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub trainer: String,
    pub costs: DailyRates,
    pub prices: DailyRates,
}

impl From<&Training> for TrainingDetails {
    fn from(t: &Training) -> Self {
        TrainingDetails {
            id: t.id.clone(),
            client_name: t.client_name.clone(),
            training_type: t.training_type.clone(),
            start_date: t.start_date,
            end_date: t.end_date,
            trainer: t.trainer.clone(),
            costs: t.costs,
            prices: t.prices,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::ItemCategory;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_quotation() -> Quotation {
        NewQuotation {
            quotation_number: "QT-1".to_string(),
            client_name: "Acme".to_string(),
            items: vec![
                LineItem::new(ItemCategory::LabCostPerPax, "Lab", Money::from_rupees(100), 2),
                LineItem::new(ItemCategory::TrainerCost, "Trainer", Money::from_rupees(500), 3),
            ],
            ..Default::default()
        }
        .into_quotation("q1".to_string(), Utc::now(), &TaxCalculator::default())
    }

    #[test]
    fn test_status_defaults() {
        assert_eq!(LeadStatus::default(), LeadStatus::New);
        assert_eq!(QuotationStatus::default(), QuotationStatus::Pending);
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(TrainerStatus::default(), TrainerStatus::Active);
        assert_eq!(PoStatus::default(), PoStatus::Pending);
        assert_eq!(TrainingStatus::default(), TrainingStatus::Confirmed);
    }

    #[test]
    fn test_new_quotation_computes_totals() {
        let q = sample_quotation();
        assert_eq!(q.status, QuotationStatus::Pending);
        assert_eq!(q.subtotal, Money::from_rupees(1_700));
        assert_eq!(q.gst, Money::from_rupees(306));
        assert_eq!(q.total, Money::from_rupees(2_006));
    }

    #[test]
    fn test_quotation_patch_merges_and_keeps_unset_fields() {
        let mut q = sample_quotation();
        q.apply_patch(QuotationPatch {
            client_name: Some("Acme Ltd".to_string()),
            items: Some(vec![LineItem::new(
                ItemCategory::Other,
                "Extra",
                Money::from_rupees(50),
                1,
            )]),
            ..Default::default()
        });
        q.recompute_totals(&TaxCalculator::default());

        assert_eq!(q.client_name, "Acme Ltd");
        assert_eq!(q.quotation_number, "QT-1");
        assert_eq!(q.subtotal, Money::from_rupees(50));
        assert_eq!(q.total, Money::from_paise(5_900));
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = QuotationPatch {
            notes: Some("Updated".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "notes": "Updated" }));
    }

    #[test]
    fn test_order_from_quotation_uses_line_totals() {
        let q = sample_quotation();
        let new_order = NewOrder::from_quotation(&q, "ORD-1", date(2024, 6, 1));

        assert_eq!(new_order.quotation_id.as_deref(), Some("q1"));
        assert_eq!(new_order.items.len(), 2);
        assert_eq!(new_order.items[0].unit_cost, Some(Money::from_rupees(200)));
        assert_eq!(new_order.items[0].quantity, Some(1));
        assert_eq!(new_order.items[1].category, ItemCategory::TrainerCost);

        let order = new_order.into_order("o1".to_string(), Utc::now(), &TaxCalculator::default());
        assert_eq!(order.subtotal, q.subtotal);
        assert_eq!(order.total, q.total);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_order_rows_count_at_least_once() {
        let order = NewOrder {
            client_name: "Acme".to_string(),
            items: vec![LineItem::new(ItemCategory::Other, "", Money::from_rupees(10), 0)],
            ..Default::default()
        }
        .into_order("o1".to_string(), Utc::now(), &TaxCalculator::default());

        assert_eq!(order.subtotal, Money::from_rupees(10));
    }

    #[test]
    fn test_training_financials() {
        let training = NewTraining {
            client_name: "Acme".to_string(),
            training_type: "Rust".to_string(),
            start_date: date(2024, 3, 4),
            end_date: date(2024, 3, 6),
            trainer: "Priya".to_string(),
            trainer_email: Some(String::new()),
            costs: DailyRates {
                trainer_per_day: Money::from_rupees(5_000),
                lab_per_day: Money::from_rupees(500),
                platform_per_day: Money::from_rupees(500),
            },
            prices: DailyRates {
                trainer_per_day: Money::from_rupees(8_000),
                lab_per_day: Money::from_rupees(1_000),
                platform_per_day: Money::from_rupees(1_000),
            },
        }
        .into_training("t1".to_string(), Utc::now());

        assert_eq!(training.status, TrainingStatus::Confirmed);
        assert_eq!(training.trainer_email, None);
        assert_eq!(training.days().unwrap(), 3);
        assert_eq!(training.revenue().unwrap(), Money::from_rupees(30_000));
        assert_eq!(training.cost().unwrap(), Money::from_rupees(18_000));
        assert_eq!(training.profit().unwrap(), Money::from_rupees(12_000));

        let details = TrainingDetails::from(&training);
        assert_eq!(details.client_name, "Acme");
        assert_eq!(details.prices, training.prices);
    }

    #[test]
    fn test_out_of_range_amounts_fail_validation() {
        let huge = LineItem::new(
            ItemCategory::Other,
            "",
            Money::from_rupees(1_000_000_000_000),
            10_000_000_000,
        );

        let quotation = NewQuotation {
            client_name: "Acme".to_string(),
            items: vec![huge.clone()],
            ..Default::default()
        };
        assert!(quotation.validate().is_err());

        let patch = QuotationPatch {
            items: Some(vec![huge.clone()]),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(QuotationPatch::default().validate().is_ok());

        let order = NewOrder {
            client_name: "Acme".to_string(),
            items: vec![huge],
            ..Default::default()
        };
        assert!(order.validate().is_err());

        let rates = DailyRates {
            trainer_per_day: Money::MAX,
            ..Default::default()
        };
        let training = NewTraining {
            client_name: "Acme".to_string(),
            training_type: String::new(),
            start_date: date(2024, 3, 4),
            end_date: date(2024, 3, 5),
            trainer: String::new(),
            trainer_email: None,
            costs: DailyRates::default(),
            prices: rates,
        };
        assert!(training.validate().is_err());

        let stored = training.into_training("t1".to_string(), Utc::now());
        assert!(stored.revenue().is_err());
        assert_eq!(stored.cost().unwrap(), Money::zero());
    }

    #[test]
    fn test_new_trainer_po_rejects_reversed_dates() {
        let po = NewTrainerPo {
            po_date: None,
            order_id: None,
            trainer_id: "tr1".to_string(),
            start_date: date(2024, 3, 6),
            end_date: date(2024, 3, 4),
            daily_rate: Money::from_rupees(1_000),
            notes: None,
        };
        assert!(po.validate().is_err());
    }

    #[test]
    fn test_records_read_form_json() {
        let lead: NewLead = serde_json::from_value(json!({
            "leadNumber": "LD-1",
            "date": "2024-05-01",
            "companyName": "Globex",
            "contactPerson": "Hank",
            "participants": 12
        }))
        .unwrap();
        assert!(lead.validate().is_ok());
        let lead = lead.into_lead("l1".to_string(), Utc::now());
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.participants, Some(12));

        let trainer: NewTrainer = serde_json::from_value(json!({
            "name": "Priya",
            "email": "priya@example.com",
            "dailyRate": "8000"
        }))
        .unwrap();
        assert_eq!(trainer.daily_rate, Money::from_rupees(8_000));
    }
}
