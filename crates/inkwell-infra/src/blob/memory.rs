//! In-memory blob store - used in tests and when no storage root is wanted.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use inkwell_core::error::BlobError;
use inkwell_core::ports::BlobStore;

use super::sanitize;

/// Blob store keeping everything in a HashMap. Data is lost on restart.
pub struct InMemoryBlobStore {
    store: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(&self, prefix: &str, filename: &str, bytes: &[u8]) -> Result<String, BlobError> {
        sanitize(prefix).ok_or_else(|| BlobError::InvalidPath(prefix.to_string()))?;

        let name = match filename.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => format!("{}.{}", Uuid::new_v4(), ext),
            _ => Uuid::new_v4().to_string(),
        };
        let path = format!("{prefix}/{name}");

        let mut store = self.store.write().await;
        store.insert(path.clone(), bytes.to_vec());
        Ok(path)
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, BlobError> {
        let store = self.store.read().await;
        Ok(store.get(path).cloned())
    }

    async fn delete(&self, path: &str) -> Result<(), BlobError> {
        let mut store = self.store.write().await;
        store.remove(path);
        Ok(())
    }
}
