//! # Inkwell Core
//!
//! The domain layer of the Inkwell blog backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validate;

pub use error::DomainError;
