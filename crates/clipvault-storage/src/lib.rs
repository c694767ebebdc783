//! ClipVault Storage Library
//!
//! This crate provides storage abstraction and implementations for ClipVault.
//! It includes the Storage trait and implementations for S3 and local filesystem.
//!
//! # Storage key format
//!
//! Storage keys are owner-scoped. All backends use the same key layout for consistency:
//!
//! - `{owner_email}/{filename}`
//!
//! where the filename is the staged name minted at upload time
//! (`video-{unix_millis}.{ext}`). Keys must be relative paths without `..`
//! components. Naming is centralized in the `keys` module so all backends and
//! the upload pipeline stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use clipvault_core::StorageBackend;
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
