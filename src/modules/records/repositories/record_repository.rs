// Record collection persistence
//
// The whole collection is one JSON array under a single key. Every mutation
// re-reads the stored array, applies the change, writes the full array back,
// and only then replaces the cached copy. A failed read or write leaves the
// cache at the last persisted state. This is safe only with one writer.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::config::storage::DEFAULT_RECORDS_KEY;
use crate::core::{AppError, KeyValueStore, Result};
use crate::modules::records::models::{Record, RecordDraft};

/// Repository over the persisted record collection, newest first
pub struct RecordRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
    records: Vec<Record>,
}

impl RecordRepository {
    /// Create a repository for the collection stored under `key`
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            records: Vec::new(),
        }
    }

    /// Repository under the standard `GST_RECORDS` key
    pub fn with_default_key(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_RECORDS_KEY)
    }

    /// Records as of the last successful load or mutation
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Reload the collection from the store.
    ///
    /// A missing or blank document is an empty collection. A document that is
    /// not a record array is returned as [`AppError::Corrupted`].
    pub async fn load(&mut self) -> Result<&[Record]> {
        self.records = self.read_collection().await?;
        debug!(
            key = self.key.as_str(),
            record_count = self.records.len(),
            "Records loaded"
        );
        Ok(&self.records)
    }

    /// Save a new record at the front of the collection
    ///
    /// # Returns
    /// * `Result<Record>` - The stored record with its generated id and date
    ///
    /// # Errors
    /// Validation errors are returned before storage is touched. On a
    /// persistence error the cached collection is unchanged.
    pub async fn add(&mut self, draft: RecordDraft) -> Result<Record> {
        draft.validate()?;

        let record = Record::from_draft(draft, Utc::now());

        let mut updated = self.read_collection().await?;
        updated.insert(0, record.clone());
        self.commit(updated).await?;

        info!(
            record_id = record.id.as_str(),
            category = %record.category,
            record_count = self.records.len(),
            "Record saved"
        );

        Ok(record)
    }

    /// Delete the record with `id`. Unknown ids are a successful no-op.
    pub async fn remove(&mut self, id: &str) -> Result<()> {
        let current = self.read_collection().await?;
        let before = current.len();

        let updated: Vec<Record> = current.into_iter().filter(|r| r.id != id).collect();

        if updated.len() == before {
            warn!(record_id = id, "Remove requested for unknown record");
            self.records = updated;
            return Ok(());
        }

        self.commit(updated).await?;
        info!(
            record_id = id,
            record_count = self.records.len(),
            "Record deleted"
        );

        Ok(())
    }

    /// Flip the favourite flag on the record with `id`. Unknown ids are a
    /// successful no-op.
    pub async fn toggle_favorite(&mut self, id: &str) -> Result<()> {
        let mut updated = self.read_collection().await?;

        let Some(index) = updated.iter().position(|r| r.id == id) else {
            warn!(record_id = id, "Favorite toggle requested for unknown record");
            self.records = updated;
            return Ok(());
        };

        let is_favorite = !updated[index].is_favorite;
        updated[index].is_favorite = is_favorite;

        self.commit(updated).await?;
        info!(record_id = id, is_favorite, "Record favorite toggled");

        Ok(())
    }

    async fn read_collection(&self) -> Result<Vec<Record>> {
        let stored = self.store.get(&self.key).await?;

        match stored {
            Some(json) if !json.trim().is_empty() => {
                serde_json::from_str(&json).map_err(AppError::Corrupted)
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Persist `updated` in full, then make it the cached collection
    async fn commit(&mut self, updated: Vec<Record>) -> Result<()> {
        let json = serde_json::to_string(&updated)?;

        if let Err(err) = self.store.set(&self.key, &json).await {
            error!(key = self.key.as_str(), error = %err, "Failed to persist records");
            return Err(err);
        }

        self.records = updated;
        Ok(())
    }
}
