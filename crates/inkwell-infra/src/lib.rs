//! # Inkwell Infrastructure
//!
//! Concrete implementations of the ports defined in `inkwell-core`.
//! This crate contains the database repositories and blob storage backends.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod blob;
pub mod database;

// Re-exports - In-Memory
pub use blob::InMemoryBlobStore;
pub use database::InMemoryPostRepository;

// Re-exports - Disk
pub use blob::DiskBlobStore;

// Re-exports - Postgres
pub use database::DatabaseConnections;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
