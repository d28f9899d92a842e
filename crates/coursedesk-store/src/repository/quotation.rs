//! # Quotation Repository
//!
//! Quotations plus their edit history.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  update(id, patch, reason)                                             │
//! │       │                                                                 │
//! │       ├─► quotations.json: merge patch ► recompute totals              │
//! │       │                    ► set lastModified ► write                  │
//! │       │                                                                 │
//! │       └─► quotation_history.json: append                               │
//! │             { quotationId, date, reason, editor, changes }             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two writes are independent; a failure between them leaves the
//! quotation updated without a history entry.

use chrono::Utc;
use tracing::{debug, info};

use coursedesk_core::{
    NewQuotation, Quotation, QuotationEdit, QuotationPatch, QuotationStatus, TaxCalculator,
    SYSTEM_EDITOR,
};

use super::generate_id;
use crate::error::{StoreError, StoreResult};
use crate::json_file::JsonFile;

#[derive(Debug, Clone)]
pub struct QuotationRepository {
    file: JsonFile<Quotation>,
    history: JsonFile<QuotationEdit>,
    tax: TaxCalculator,
}

impl QuotationRepository {
    pub fn new(
        file: JsonFile<Quotation>,
        history: JsonFile<QuotationEdit>,
        tax: TaxCalculator,
    ) -> Self {
        QuotationRepository { file, history, tax }
    }

    /// Saves a new pending quotation. Totals are computed from the items;
    /// any totals sent by the client are ignored.
    pub async fn create(&self, new: NewQuotation) -> StoreResult<Quotation> {
        new.validate()?;

        let quotation = new.into_quotation(generate_id(), Utc::now(), &self.tax);
        info!(
            id = %quotation.id,
            number = %quotation.quotation_number,
            total = %quotation.total,
            "Creating quotation"
        );

        self.file.append(quotation.clone()).await?;
        Ok(quotation)
    }

    /// All quotations, optionally only those raised for one lead.
    pub async fn list(&self, lead_id: Option<&str>) -> StoreResult<Vec<Quotation>> {
        let quotations = self.file.read_all().await?;
        Ok(match lead_id {
            Some(lead_id) => quotations
                .into_iter()
                .filter(|q| q.lead_id.as_deref() == Some(lead_id))
                .collect(),
            None => quotations,
        })
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<Quotation>> {
        debug!(id = %id, "Getting quotation");
        Ok(self.file.read_all().await?.into_iter().find(|q| q.id == id))
    }

    /// Sets the status without touching anything else.
    pub async fn update_status(&self, id: &str, status: QuotationStatus) -> StoreResult<Quotation> {
        debug!(id = %id, ?status, "Updating quotation status");

        let mut quotations = self.file.read_all().await?;
        let quotation = quotations
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| StoreError::not_found("Quotation", id))?;

        quotation.status = status;
        let updated = quotation.clone();

        self.file.write_all(&quotations).await?;
        Ok(updated)
    }

    /// Merges `patch`, recomputes totals and records a history entry.
    pub async fn update(
        &self,
        id: &str,
        patch: QuotationPatch,
        reason: Option<String>,
    ) -> StoreResult<Quotation> {
        patch.validate()?;

        let mut quotations = self.file.read_all().await?;
        let quotation = quotations
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| StoreError::not_found("Quotation", id))?;

        let changes = serde_json::to_value(&patch)?;
        let now = Utc::now();

        quotation.apply_patch(patch);
        quotation.recompute_totals(&self.tax);
        quotation.last_modified = Some(now);
        let updated = quotation.clone();

        self.file.write_all(&quotations).await?;

        info!(id = %id, reason = ?reason, "Quotation edited");
        self.history
            .append(QuotationEdit {
                quotation_id: id.to_string(),
                date: now,
                reason,
                editor: SYSTEM_EDITOR.to_string(),
                changes,
            })
            .await?;

        Ok(updated)
    }

    /// Edit history of one quotation, oldest first.
    pub async fn history(&self, id: &str) -> StoreResult<Vec<QuotationEdit>> {
        Ok(self
            .history
            .read_all()
            .await?
            .into_iter()
            .filter(|h| h.quotation_id == id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::temp_store;
    use crate::StoreError;
    use coursedesk_core::{
        ItemCategory, LineItem, Money, NewQuotation, QuotationPatch, QuotationStatus, SYSTEM_EDITOR,
    };

    fn new_quotation(lead_id: Option<&str>) -> NewQuotation {
        NewQuotation {
            quotation_number: "QT-1".to_string(),
            lead_id: lead_id.map(str::to_string),
            client_name: "Acme".to_string(),
            items: vec![LineItem::new(
                ItemCategory::LabCostPerPax,
                "Lab",
                Money::from_rupees(100),
                2,
            )],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_computes_totals() {
        let (_dir, store) = temp_store().await;
        let q = store.quotations().create(new_quotation(None)).await.unwrap();

        assert_eq!(q.status, QuotationStatus::Pending);
        assert_eq!(q.subtotal, Money::from_rupees(200));
        assert_eq!(q.gst, Money::from_rupees(36));
        assert_eq!(q.total, Money::from_rupees(236));

        let stored = store.quotations().get(&q.id).await.unwrap().unwrap();
        assert_eq!(stored, q);
    }

    #[tokio::test]
    async fn test_list_filters_by_lead() {
        let (_dir, store) = temp_store().await;
        let repo = store.quotations();
        repo.create(new_quotation(Some("lead-a"))).await.unwrap();
        repo.create(new_quotation(Some("lead-b"))).await.unwrap();
        repo.create(new_quotation(None)).await.unwrap();

        assert_eq!(repo.list(None).await.unwrap().len(), 3);
        assert_eq!(repo.list(Some("lead-a")).await.unwrap().len(), 1);
        assert!(repo.list(Some("lead-z")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_status() {
        let (_dir, store) = temp_store().await;
        let repo = store.quotations();
        let q = repo.create(new_quotation(None)).await.unwrap();

        let updated = repo.update_status(&q.id, QuotationStatus::Approved).await.unwrap();
        assert_eq!(updated.status, QuotationStatus::Approved);
        assert_eq!(updated.total, q.total);

        let err = repo.update_status("nope", QuotationStatus::Rejected).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_recomputes_and_records_history() {
        let (_dir, store) = temp_store().await;
        let repo = store.quotations();
        let q = repo.create(new_quotation(None)).await.unwrap();

        let patch = QuotationPatch {
            items: Some(vec![LineItem::new(
                ItemCategory::TrainerCost,
                "Trainer",
                Money::from_rupees(500),
                3,
            )]),
            notes: Some("Revised scope".to_string()),
            ..Default::default()
        };
        let updated = repo
            .update(&q.id, patch, Some("Client asked for trainer".to_string()))
            .await
            .unwrap();

        assert_eq!(updated.subtotal, Money::from_rupees(1_500));
        assert_eq!(updated.gst, Money::from_rupees(270));
        assert_eq!(updated.total, Money::from_rupees(1_770));
        assert_eq!(updated.client_name, "Acme");
        assert!(updated.last_modified.is_some());

        let history = repo.history(&q.id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].editor, SYSTEM_EDITOR);
        assert_eq!(history[0].reason.as_deref(), Some("Client asked for trainer"));
        assert_eq!(history[0].changes["notes"], "Revised scope");
        assert!(history[0].changes.get("clientName").is_none());

        assert!(repo.history("other").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_items_are_rejected() {
        let (_dir, store) = temp_store().await;
        let repo = store.quotations();
        let huge = vec![LineItem::new(
            ItemCategory::Other,
            "Overflow",
            Money::from_rupees(1_000_000_000_000),
            10_000_000_000,
        )];

        let mut new = new_quotation(None);
        new.items = huge.clone();
        let err = repo.create(new).await.unwrap_err();
        assert!(matches!(err, StoreError::Core(_)));
        assert!(repo.list(None).await.unwrap().is_empty());

        let q = repo.create(new_quotation(None)).await.unwrap();
        let patch = QuotationPatch {
            items: Some(huge),
            ..Default::default()
        };
        let err = repo.update(&q.id, patch, None).await.unwrap_err();
        assert!(matches!(err, StoreError::Core(_)));

        let stored = repo.get(&q.id).await.unwrap().unwrap();
        assert_eq!(stored.total, q.total);
        assert!(repo.history(&q.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_writes_no_history() {
        let (_dir, store) = temp_store().await;
        let repo = store.quotations();

        let err = repo
            .update("missing", QuotationPatch::default(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert!(repo.history("missing").await.unwrap().is_empty());
    }
}
