//! # Lead Repository

use chrono::Utc;
use tracing::debug;

use coursedesk_core::{Lead, NewLead};

use super::generate_id;
use crate::error::StoreResult;
use crate::json_file::JsonFile;

#[derive(Debug, Clone)]
pub struct LeadRepository {
    file: JsonFile<Lead>,
}

impl LeadRepository {
    pub fn new(file: JsonFile<Lead>) -> Self {
        LeadRepository { file }
    }

    /// All leads in insertion order.
    pub async fn list(&self) -> StoreResult<Vec<Lead>> {
        self.file.read_all().await
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<Lead>> {
        debug!(id = %id, "Getting lead");
        Ok(self.list().await?.into_iter().find(|l| l.id == id))
    }

    pub async fn create(&self, new: NewLead) -> StoreResult<Lead> {
        new.validate()?;

        let lead = new.into_lead(generate_id(), Utc::now());
        debug!(id = %lead.id, company = %lead.company_name, "Creating lead");

        self.file.append(lead.clone()).await?;
        Ok(lead)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::temp_store;
    use crate::StoreError;
    use coursedesk_core::{LeadStatus, NewLead};

    #[tokio::test]
    async fn test_create_list_get() {
        let (_dir, store) = temp_store().await;
        let repo = store.leads();

        let lead = repo
            .create(NewLead {
                lead_number: "LD-1".to_string(),
                company_name: "Globex".to_string(),
                participants: Some(10),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(repo.list().await.unwrap().len(), 1);
        let fetched = repo.get(&lead.id).await.unwrap();
        assert_eq!(fetched, Some(lead));
        assert_eq!(repo.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_requires_company() {
        let (_dir, store) = temp_store().await;
        let err = store.leads().create(NewLead::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::Core(_)));
        assert!(store.leads().list().await.unwrap().is_empty());
    }
}
