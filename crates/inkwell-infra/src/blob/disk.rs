//! Disk-backed blob store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use inkwell_core::error::BlobError;
use inkwell_core::ports::BlobStore;

use super::sanitize;

/// Blob store writing files under a root directory.
///
/// The store generates final filenames (uuid plus the original extension),
/// so concurrent uploads of the same file never collide.
pub struct DiskBlobStore {
    root: PathBuf,
}

impl DiskBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl BlobStore for DiskBlobStore {
    async fn put(&self, prefix: &str, filename: &str, bytes: &[u8]) -> Result<String, BlobError> {
        let prefix_path =
            sanitize(prefix).ok_or_else(|| BlobError::InvalidPath(prefix.to_string()))?;

        let name = match Path::new(filename).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        let dir = self.root.join(&prefix_path);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| BlobError::Io(e.to_string()))?;

        tokio::fs::write(dir.join(&name), bytes)
            .await
            .map_err(|e| BlobError::Io(e.to_string()))?;

        let path = format!("{}/{}", prefix_path.to_string_lossy().replace('\\', "/"), name);
        tracing::debug!(blob_path = %path, size = bytes.len(), "Stored blob");
        Ok(path)
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, BlobError> {
        let Some(rel) = sanitize(path) else {
            return Ok(None);
        };

        match tokio::fs::read(self.root.join(rel)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BlobError::Io(e.to_string())),
        }
    }

    async fn delete(&self, path: &str) -> Result<(), BlobError> {
        // Deleting an absent or unusable path is a no-op.
        let Some(rel) = sanitize(path) else {
            return Ok(());
        };

        match tokio::fs::remove_file(self.root.join(rel)).await {
            Ok(()) => {
                tracing::debug!(blob_path = %path, "Deleted blob");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BlobError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_stores_and_get_retrieves() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskBlobStore::new(dir.path());

        let path = store
            .put("images/posts/featured-images", "photo.jpg", b"jpeg-bytes")
            .await
            .unwrap();

        assert!(path.starts_with("images/posts/featured-images/"));
        assert!(path.ends_with(".jpg"));
        assert_eq!(store.get(&path).await.unwrap().unwrap(), b"jpeg-bytes");
    }

    #[tokio::test]
    async fn put_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskBlobStore::new(dir.path());

        let path = store.put("uploads", "raw", b"data").await.unwrap();
        assert!(store.get(&path).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn put_rejects_traversal_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskBlobStore::new(dir.path());

        let result = store.put("../outside", "photo.jpg", b"x").await;
        assert!(matches!(result, Err(BlobError::InvalidPath(_))));
    }

    #[tokio::test]
    async fn delete_removes_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskBlobStore::new(dir.path());

        let path = store.put("uploads", "photo.jpg", b"x").await.unwrap();
        store.delete(&path).await.unwrap();
        assert!(store.get(&path).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskBlobStore::new(dir.path());

        store.delete("uploads/never-existed.jpg").await.unwrap();
        store.delete("../outside.jpg").await.unwrap();
    }
}
