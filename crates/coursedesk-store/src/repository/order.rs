//! # Order Repository
//!
//! Orders are created directly from the order form or converted from an
//! existing quotation. Either way the stored totals are recomputed from the
//! items with order quantity rules (every row counts at least once).

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use coursedesk_core::{NewOrder, Order, Quotation, TaxCalculator};

use super::{generate_id, generate_number};
use crate::error::{StoreError, StoreResult};
use crate::json_file::JsonFile;

#[derive(Debug, Clone)]
pub struct OrderRepository {
    file: JsonFile<Order>,
    quotations: JsonFile<Quotation>,
    tax: TaxCalculator,
}

impl OrderRepository {
    pub fn new(file: JsonFile<Order>, quotations: JsonFile<Quotation>, tax: TaxCalculator) -> Self {
        OrderRepository {
            file,
            quotations,
            tax,
        }
    }

    pub async fn list(&self) -> StoreResult<Vec<Order>> {
        self.file.read_all().await
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<Order>> {
        debug!(id = %id, "Getting order");
        Ok(self.list().await?.into_iter().find(|o| o.id == id))
    }

    pub async fn create(&self, new: NewOrder) -> StoreResult<Order> {
        new.validate()?;

        let order = new.into_order(generate_id(), Utc::now(), &self.tax);
        info!(
            id = %order.id,
            number = %order.order_number,
            total = %order.total,
            "Creating order"
        );

        self.file.append(order.clone()).await?;
        Ok(order)
    }

    /// Converts a stored quotation into a new order.
    ///
    /// Without an explicit number the order gets `ORD-<unix millis>`.
    pub async fn create_from_quotation(
        &self,
        quotation_id: &str,
        order_number: Option<String>,
        order_date: NaiveDate,
    ) -> StoreResult<Order> {
        let quotation = self
            .quotations
            .read_all()
            .await?
            .into_iter()
            .find(|q| q.id == quotation_id)
            .ok_or_else(|| StoreError::not_found("Quotation", quotation_id))?;

        let number = order_number
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| generate_number("ORD"));

        debug!(quotation_id = %quotation_id, number = %number, "Converting quotation to order");
        self.create(NewOrder::from_quotation(&quotation, number, order_date))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::temp_store;
    use crate::StoreError;
    use chrono::NaiveDate;
    use coursedesk_core::{ItemCategory, LineItem, Money, NewOrder, NewQuotation, OrderStatus};

    #[tokio::test]
    async fn test_create_and_get() {
        let (_dir, store) = temp_store().await;
        let repo = store.orders();

        let order = repo
            .create(NewOrder {
                order_number: "ORD-1".to_string(),
                client_name: "Initech".to_string(),
                items: vec![LineItem::new(ItemCategory::Other, "Kit", Money::from_rupees(250), 0)],
                ..Default::default()
            })
            .await
            .unwrap();

        // quantity 0 counts once on orders
        assert_eq!(order.subtotal, Money::from_rupees(250));
        assert_eq!(order.gst, Money::from_rupees(45));
        assert_eq!(order.total, Money::from_rupees(295));
        assert_eq!(order.status, OrderStatus::Pending);

        assert_eq!(repo.list().await.unwrap().len(), 1);
        assert!(repo.get(&order.id).await.unwrap().is_some());
        assert!(repo.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_from_quotation() {
        let (_dir, store) = temp_store().await;
        let quotation = store
            .quotations()
            .create(NewQuotation {
                client_name: "Acme".to_string(),
                email: "ops@acme.test".to_string(),
                items: vec![
                    LineItem::new(ItemCategory::LabCostPerPax, "Lab", Money::from_rupees(100), 2),
                    LineItem::new(ItemCategory::TrainerCost, "Trainer", Money::from_rupees(500), 3),
                ],
                ..Default::default()
            })
            .await
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let order = store
            .orders()
            .create_from_quotation(&quotation.id, None, date)
            .await
            .unwrap();

        assert!(order.order_number.starts_with("ORD-"));
        assert_eq!(order.order_date, Some(date));
        assert_eq!(order.quotation_id.as_deref(), Some(quotation.id.as_str()));
        assert_eq!(order.email, "ops@acme.test");
        assert_eq!(order.items[1].unit_cost, Some(Money::from_rupees(1_500)));
        assert_eq!(order.items[1].quantity, Some(1));
        assert_eq!(order.total, quotation.total);
    }

    #[tokio::test]
    async fn test_create_from_missing_quotation() {
        let (_dir, store) = temp_store().await;
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        let err = store
            .orders()
            .create_from_quotation("missing", Some("ORD-9".to_string()), date)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert!(store.orders().list().await.unwrap().is_empty());
    }
}
