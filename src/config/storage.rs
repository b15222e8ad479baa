use crate::core::{AppError, KeyValueStore, Result};
use crate::storage::{FileStore, InMemoryStore};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

/// Storage key the record collection lives under
pub const DEFAULT_RECORDS_KEY: &str = "GST_RECORDS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per key on disk
    File,
    /// Process-local map, lost on exit
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(AppError::configuration(format!(
                "Invalid STORAGE_BACKEND: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub records_key: String,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self> {
        Ok(StorageConfig {
            backend: env::var("STORAGE_BACKEND")
                .unwrap_or_else(|_| "file".to_string())
                .parse()?,
            data_dir: env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            records_key: env::var("RECORDS_KEY")
                .unwrap_or_else(|_| DEFAULT_RECORDS_KEY.to_string()),
        })
    }

    /// Build the configured store backend
    pub fn create_store(&self) -> Arc<dyn KeyValueStore> {
        match self.backend {
            StorageBackend::File => {
                tracing::debug!(dir = %self.data_dir.display(), "Using file store");
                Arc::new(FileStore::new(&self.data_dir))
            }
            StorageBackend::Memory => {
                tracing::debug!("Using in-memory store");
                Arc::new(InMemoryStore::new())
            }
        }
    }
}
