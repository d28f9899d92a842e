//! # Training Repository

use chrono::Utc;
use tracing::{debug, info};

use coursedesk_core::{NewTraining, Training, TrainingPatch};

use super::generate_id;
use crate::error::{StoreError, StoreResult};
use crate::json_file::JsonFile;

#[derive(Debug, Clone)]
pub struct TrainingRepository {
    file: JsonFile<Training>,
}

impl TrainingRepository {
    pub fn new(file: JsonFile<Training>) -> Self {
        TrainingRepository { file }
    }

    pub async fn list(&self) -> StoreResult<Vec<Training>> {
        self.file.read_all().await
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<Training>> {
        debug!(id = %id, "Getting training");
        Ok(self.list().await?.into_iter().find(|t| t.id == id))
    }

    /// Records a confirmed training.
    pub async fn create(&self, new: NewTraining) -> StoreResult<Training> {
        new.validate()?;

        let training = new.into_training(generate_id(), Utc::now());
        info!(
            id = %training.id,
            client = %training.client_name,
            start = %training.start_date,
            end = %training.end_date,
            "Creating training"
        );

        self.file.append(training.clone()).await?;
        Ok(training)
    }

    /// Merges `patch` into the stored training.
    pub async fn update(&self, id: &str, patch: TrainingPatch) -> StoreResult<Training> {
        debug!(id = %id, "Updating training");

        let mut trainings = self.file.read_all().await?;
        let training = trainings
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("Training", id))?;

        training.apply_patch(patch);
        let updated = training.clone();

        self.file.write_all(&trainings).await?;
        Ok(updated)
    }
}
