//! Application state - shared across all handlers.

use std::sync::Arc;

use inkwell_core::ports::{BlobStore, PostRepository};
use inkwell_infra::blob::DiskBlobStore;
use inkwell_infra::database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use inkwell_infra::database::{DatabaseConnections, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub blobs: Arc<dyn BlobStore>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostRepository> = {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => Arc::new(PostgresPostRepository::new(connections.main)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostRepository::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostRepository> = {
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryPostRepository::new())
        };

        let blobs: Arc<dyn BlobStore> = Arc::new(DiskBlobStore::new(&config.storage_root));

        tracing::info!("Application state initialized");

        Self { posts, blobs }
    }
}
