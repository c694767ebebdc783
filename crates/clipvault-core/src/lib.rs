//! Core domain types for clipvault.
//!
//! This crate holds everything the other crates share: the error taxonomy,
//! configuration, domain models, client-visible message strings, the
//! credential engine, and the validation rules. It has no HTTP or storage
//! dependencies of its own.

pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod password;
pub mod validation;

pub use config::{Config, StorageBackend};
pub use error::{AppError, FieldError, LogLevel};
