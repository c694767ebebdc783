use std::sync::Arc;

use anyhow::Context;

use clipvault_core::Config;
use clipvault_storage::{create_storage, Storage};

/// Build the configured blob storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>, anyhow::Error> {
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;
    tracing::info!(backend = ?storage.backend_type(), "Storage initialized");
    Ok(storage)
}

/// Make sure the upload spool directory exists before the first multipart
/// request needs it.
pub async fn setup_spool_dir(config: &Config) -> Result<(), anyhow::Error> {
    tokio::fs::create_dir_all(&config.upload_spool_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create upload spool directory {}",
                config.upload_spool_dir
            )
        })?;
    Ok(())
}
