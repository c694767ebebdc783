//! Route configuration and setup.

mod health;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use clipvault_core::Config;

use crate::auth::require_auth;
use crate::handlers;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let public_routes = public_routes(state.clone());
    let protected_routes = protected_routes(state.clone()).layer(
        axum::middleware::from_fn_with_state(state.clone(), require_auth),
    );

    // The outer body cap only guards against unbounded requests; it sits above
    // the per-file limit so the upload pipeline reports size violations itself.
    let app = public_routes
        .merge(protected_routes)
        .layer(RequestBodyLimitLayer::new(
            (config.max_video_size_bytes * 2) as usize,
        ))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();
        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}

fn public_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/health",
            get({
                let state = state.clone();
                move || {
                    let state = state.clone();
                    async { health::health_check(state).await }
                }
            }),
        )
        .route("/register", post(handlers::register::register))
        .route("/login", post(handlers::login::login))
        .with_state(state)
}

fn protected_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/user-metadata", get(handlers::user_metadata::user_metadata))
        .route("/user-videos", get(handlers::user_videos::user_videos))
        .route("/bio", post(handlers::bio::add_bio))
        .route("/upload-video", post(handlers::video_upload::upload_video))
        .route(
            "/registered-users",
            get(handlers::registered_users::registered_users),
        )
        .route(
            "/listing-videos",
            get(handlers::listing_videos::listing_videos),
        )
        .with_state(state)
}
