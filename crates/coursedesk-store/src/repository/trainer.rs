//! # Trainer Repository

use chrono::Utc;
use tracing::{debug, info};

use coursedesk_core::{NewTrainer, Trainer, TrainerPatch};

use super::generate_id;
use crate::error::{StoreError, StoreResult};
use crate::json_file::JsonFile;

#[derive(Debug, Clone)]
pub struct TrainerRepository {
    file: JsonFile<Trainer>,
}

impl TrainerRepository {
    pub fn new(file: JsonFile<Trainer>) -> Self {
        TrainerRepository { file }
    }

    pub async fn list(&self) -> StoreResult<Vec<Trainer>> {
        self.file.read_all().await
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<Trainer>> {
        debug!(id = %id, "Getting trainer");
        Ok(self.list().await?.into_iter().find(|t| t.id == id))
    }

    pub async fn create(&self, new: NewTrainer) -> StoreResult<Trainer> {
        new.validate()?;

        let trainer = new.into_trainer(generate_id(), Utc::now());
        info!(id = %trainer.id, name = %trainer.name, "Creating trainer");

        self.file.append(trainer.clone()).await?;
        Ok(trainer)
    }

    /// Merges `patch` and stamps `lastModified`.
    pub async fn update(&self, id: &str, patch: TrainerPatch) -> StoreResult<Trainer> {
        debug!(id = %id, "Updating trainer");

        let mut trainers = self.file.read_all().await?;
        let trainer = trainers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("Trainer", id))?;

        trainer.apply_patch(patch);
        trainer.last_modified = Some(Utc::now());
        let updated = trainer.clone();

        self.file.write_all(&trainers).await?;
        Ok(updated)
    }
}
