//! Blob storage backends.

mod disk;
mod memory;

pub use disk::DiskBlobStore;
pub use memory::InMemoryBlobStore;

use std::path::{Component, Path, PathBuf};

/// Reject absolute paths and path traversal; returns the normalized
/// relative path or `None` when the path must not touch the filesystem.
pub(crate) fn sanitize(path: &str) -> Option<PathBuf> {
    if path.is_empty() {
        return None;
    }

    let mut out = PathBuf::new();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(part) => out.push(part),
            _ => return None,
        }
    }
    Some(out)
}
