use async_trait::async_trait;

use crate::error::BlobError;

/// Blob store trait - abstraction over file storage backends (disk, in-memory).
///
/// Paths are relative, forward-slash separated, and generated by the store:
/// callers hand over a prefix and the original filename, the store picks the
/// final name and returns the path to record.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `prefix`, deriving the extension from `filename`.
    /// Returns the relative path of the stored blob.
    async fn put(&self, prefix: &str, filename: &str, bytes: &[u8]) -> Result<String, BlobError>;

    /// Fetch a blob by path. `None` when the path does not resolve.
    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, BlobError>;

    /// Delete a blob by path. Deleting a nonexistent path is a no-op.
    async fn delete(&self, path: &str) -> Result<(), BlobError>;
}
