//! # JSON Collection Files
//!
//! Each collection lives in one file holding a JSON array. Every operation
//! reads the whole array, and every change rewrites the whole file.
//!
//! ```text
//! read_all:   leads.json ──► [Lead, Lead, ...]
//!             (missing)  ──► write "[]", return []
//!
//! write_all:  [Lead, ...] ──► pretty JSON (2-space indent) ──► leads.json
//! ```
//!
//! There is no locking. Two concurrent writers to the same file can lose
//! an update.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::StoreResult;

/// Contents of a freshly initialized collection file.
pub const EMPTY_COLLECTION: &str = "[]";

/// Typed handle to one collection file.
#[derive(Debug)]
pub struct JsonFile<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonFile<T> {
    fn clone(&self) -> Self {
        JsonFile {
            path: self.path.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFile {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record. A missing file is recreated empty.
    pub async fn read_all(&self) -> StoreResult<Vec<T>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => {
                let records: Vec<T> = serde_json::from_str(&data)?;
                debug!(path = %self.path.display(), count = records.len(), "Read collection");
                Ok(records)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "Collection file missing, recreating");
                tokio::fs::write(&self.path, EMPTY_COLLECTION).await?;
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the file contents with `records`.
    pub async fn write_all(&self, records: &[T]) -> StoreResult<()> {
        let data = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, data).await?;
        debug!(path = %self.path.display(), count = records.len(), "Wrote collection");
        Ok(())
    }

    /// Reads, appends `record`, writes back.
    pub async fn append(&self, record: T) -> StoreResult<()> {
        let mut records = self.read_all().await?;
        records.push(record);
        self.write_all(&records).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
    }

    #[tokio::test]
    async fn test_missing_file_is_recreated_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::<Row>::new(dir.path().join("rows.json"));

        assert!(file.read_all().await.unwrap().is_empty());
        let on_disk = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(on_disk, "[]");
    }

    #[tokio::test]
    async fn test_write_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::<Row>::new(dir.path().join("rows.json"));

        file.append(Row { name: "a".to_string() }).await.unwrap();
        file.append(Row { name: "b".to_string() }).await.unwrap();

        let on_disk = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(on_disk, "[\n  {\n    \"name\": \"a\"\n  },\n  {\n    \"name\": \"b\"\n  }\n]");
        assert_eq!(file.read_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFile::<Row>::new(path).read_all().await.unwrap_err();
        assert!(matches!(err, crate::StoreError::Serialization(_)));
    }
}
