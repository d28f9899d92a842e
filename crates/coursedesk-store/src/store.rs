//! # Store Bootstrap
//!
//! Data directory setup and repository access.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Flat File Store                                    │
//! │                                                                         │
//! │  API startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(data_dir)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::open(config).await ← mkdir -p, create missing files as "[]"    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ data/                                    │                           │
//! │  │   trainings.json      quotations.json   │                           │
//! │  │   leads.json          reports.json      │                           │
//! │  │   orders.json         quotation_history │                           │
//! │  │   trainers.json       trainer_pos.json  │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.quotations().create(..) ──► read ► modify ► write               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use coursedesk_core::TaxCalculator;

use crate::error::StoreResult;
use crate::json_file::{JsonFile, EMPTY_COLLECTION};
use crate::repository::lead::LeadRepository;
use crate::repository::order::OrderRepository;
use crate::repository::quotation::QuotationRepository;
use crate::repository::trainer::TrainerRepository;
use crate::repository::trainer_po::TrainerPoRepository;
use crate::repository::training::TrainingRepository;

// =============================================================================
// Collections
// =============================================================================

/// One data file per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Trainings,
    Quotations,
    Leads,
    /// Reserved; created on startup but not written by any repository.
    Reports,
    Orders,
    QuotationHistory,
    Trainers,
    TrainerPos,
}

impl Collection {
    pub const ALL: [Collection; 8] = [
        Collection::Trainings,
        Collection::Quotations,
        Collection::Leads,
        Collection::Reports,
        Collection::Orders,
        Collection::QuotationHistory,
        Collection::Trainers,
        Collection::TrainerPos,
    ];

    pub const fn file_name(&self) -> &'static str {
        match self {
            Collection::Trainings => "trainings.json",
            Collection::Quotations => "quotations.json",
            Collection::Leads => "leads.json",
            Collection::Reports => "reports.json",
            Collection::Orders => "orders.json",
            Collection::QuotationHistory => "quotation_history.json",
            Collection::Trainers => "trainers.json",
            Collection::TrainerPos => "trainer_pos.json",
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("./data");
/// let store = Store::open(config).await?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the collection files. Created if missing.
    pub data_dir: PathBuf,

    /// Tax applied when recomputing stored totals.
    /// Default: GST at 18%
    pub tax: TaxCalculator,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            tax: TaxCalculator::default(),
        }
    }

    /// Sets the tax calculator used for stored totals.
    pub fn tax(mut self, tax: TaxCalculator) -> Self {
        self.tax = tax;
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// Main store handle providing repository access.
///
/// Cheap to clone; repositories are created on demand and hold only paths.
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
    tax: TaxCalculator,
}

impl Store {
    /// Opens the store, creating the directory and any missing files.
    ///
    /// Existing files are left untouched.
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(data_dir = %config.data_dir.display(), "Opening data store");

        tokio::fs::create_dir_all(&config.data_dir).await?;

        for collection in Collection::ALL {
            let path = config.data_dir.join(collection.file_name());
            if !tokio::fs::try_exists(&path).await? {
                debug!(path = %path.display(), "Initializing collection file");
                tokio::fs::write(&path, EMPTY_COLLECTION).await?;
            }
        }

        info!("Data store ready");

        Ok(Store {
            data_dir: config.data_dir,
            tax: config.tax,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tax(&self) -> &TaxCalculator {
        &self.tax
    }

    fn file<T>(&self, collection: Collection) -> JsonFile<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        JsonFile::new(self.data_dir.join(collection.file_name()))
    }

    pub fn leads(&self) -> LeadRepository {
        LeadRepository::new(self.file(Collection::Leads))
    }

    pub fn quotations(&self) -> QuotationRepository {
        QuotationRepository::new(
            self.file(Collection::Quotations),
            self.file(Collection::QuotationHistory),
            self.tax,
        )
    }

    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(
            self.file(Collection::Orders),
            self.file(Collection::Quotations),
            self.tax,
        )
    }

    pub fn trainers(&self) -> TrainerRepository {
        TrainerRepository::new(self.file(Collection::Trainers))
    }

    pub fn trainer_pos(&self) -> TrainerPoRepository {
        TrainerPoRepository::new(self.file(Collection::TrainerPos))
    }

    pub fn trainings(&self) -> TrainingRepository {
        TrainingRepository::new(self.file(Collection::Trainings))
    }

    /// Checks that the data directory is still reachable.
    pub async fn health_check(&self) -> bool {
        tokio::fs::metadata(&self.data_dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_initializes_every_collection() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");

        let store = Store::open(StoreConfig::new(&data_dir)).await.unwrap();

        assert!(store.health_check().await);
        for collection in Collection::ALL {
            let contents = std::fs::read_to_string(data_dir.join(collection.file_name())).unwrap();
            assert_eq!(contents, "[]", "{}", collection.file_name());
        }
    }

    #[tokio::test]
    async fn test_open_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let leads = dir.path().join("leads.json");
        std::fs::write(&leads, "[\n  {\"keep\": true}\n]").unwrap();

        Store::open(StoreConfig::new(dir.path())).await.unwrap();

        let contents = std::fs::read_to_string(&leads).unwrap();
        assert!(contents.contains("keep"));
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("/tmp/coursedesk")
            .tax(TaxCalculator::new(coursedesk_core::Rate::from_bps(500)));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/coursedesk"));
        assert_eq!(config.tax.rate().bps(), 500);
    }
}
