use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::{AppError, KeyValueStore, Result};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes land in a sibling temp file first and are renamed into place, so a
/// failed write leaves the previous document untouched.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::persistence(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }

        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::persistence(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = self.dir.join(format!(".{}.json.tmp", key));

        fs::create_dir_all(&self.dir).await?;
        fs::write(&tmp_path, value).await.map_err(|err| {
            AppError::persistence(format!("Failed to write {}: {}", tmp_path.display(), err))
        })?;
        fs::rename(&tmp_path, &path).await.map_err(|err| {
            AppError::persistence(format!("Failed to replace {}: {}", path.display(), err))
        })?;

        Ok(())
    }
}
