//! # Trainer Purchase Order Repository
//!
//! A PO's total is always derived: inclusive days between the start and
//! end dates times the daily rate. Every new PO starts `Pending`.

use chrono::Utc;
use tracing::info;

use coursedesk_core::{po_total, NewTrainerPo, PoStatus, TrainerPo};

use super::{generate_id, generate_number};
use crate::error::StoreResult;
use crate::json_file::JsonFile;

#[derive(Debug, Clone)]
pub struct TrainerPoRepository {
    file: JsonFile<TrainerPo>,
}

impl TrainerPoRepository {
    pub fn new(file: JsonFile<TrainerPo>) -> Self {
        TrainerPoRepository { file }
    }

    pub async fn list(&self) -> StoreResult<Vec<TrainerPo>> {
        self.file.read_all().await
    }

    pub async fn create(&self, new: NewTrainerPo) -> StoreResult<TrainerPo> {
        new.validate()?;

        let total_amount = po_total(new.start_date, new.end_date, new.daily_rate)?;
        let po = TrainerPo {
            id: generate_id(),
            po_number: generate_number("PO"),
            po_date: new.po_date,
            order_id: new.order_id.filter(|o| !o.is_empty()),
            trainer_id: new.trainer_id,
            start_date: new.start_date,
            end_date: new.end_date,
            daily_rate: new.daily_rate,
            total_amount,
            notes: new.notes,
            status: PoStatus::Pending,
            created_at: Utc::now(),
        };
        info!(
            po_number = %po.po_number,
            trainer_id = %po.trainer_id,
            total = %po.total_amount,
            "Creating trainer PO"
        );

        self.file.append(po.clone()).await?;
        Ok(po)
    }
}
