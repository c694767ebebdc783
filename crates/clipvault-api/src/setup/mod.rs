//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};

use clipvault_core::Config;
use clipvault_db::{PostgresUserRepository, PostgresVideoRepository};

use crate::auth::TokenService;
use crate::services::SmtpMailer;
use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    let pool = database::setup_database(&config).await?;

    let storage = storage::setup_storage(&config).await?;
    storage::setup_spool_dir(&config).await?;

    let mailer = SmtpMailer::from_config(&config).context("Failed to initialize mailer")?;
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_expiry_hours);

    let state = Arc::new(AppState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        videos: Arc::new(PostgresVideoRepository::new(pool)),
        storage,
        mailer: Arc::new(mailer),
        tokens,
        config,
    });

    let router = routes::setup_routes(&state.config, state.clone())?;

    Ok((state, router))
}
