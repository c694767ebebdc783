//! Clipvault API Library
//!
//! This crate provides the HTTP API handlers, middleware, and application setup.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod response;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;

pub use error::HttpError;
pub use state::AppState;
