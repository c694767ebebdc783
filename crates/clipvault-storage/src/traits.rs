//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

use crate::StorageBackend;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait so
/// the upload pipeline can persist video blobs without coupling to a specific
/// provider.
///
/// **Key format:** Keys are owner-scoped: `{owner_email}/{filename}`. Key
/// generation is centralized in the `keys` module so all backends stay
/// consistent.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload content from a reader to a specific storage key.
    ///
    /// The reader is consumed until EOF, so large files never have to sit in
    /// an intermediate application buffer (backends may still buffer where
    /// their client library requires it).
    ///
    /// # Arguments
    /// * `storage_key` - Destination key, from [`crate::keys::video_key`]
    /// * `content_type` - MIME type of the content
    /// * `content_length` - Expected size of the content, when known
    /// * `reader` - Async reader that provides the file content
    ///
    /// # Returns
    /// The publicly accessible URL of the stored object.
    async fn upload_stream(
        &self,
        storage_key: &str,
        content_type: &str,
        content_length: Option<u64>,
        reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<String>;

    /// Delete an object by its storage key. Deleting a missing object is not
    /// an error.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check whether an object exists at the given key.
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
