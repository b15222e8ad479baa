use async_trait::async_trait;

use crate::core::Result;

/// Key-value slot storage holding serialized documents.
///
/// Every document is read and written whole. There are no partial updates,
/// transactions, or indexes; callers are expected to be the single writer.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the document under `key`, `None` if nothing was ever written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
