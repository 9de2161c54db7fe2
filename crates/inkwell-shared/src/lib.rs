//! # Inkwell Shared
//!
//! Serde types shared between the server and the hydrating client.
//! In a full-stack Rust setup, this crate is compiled for both server and WASM.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
