//! Shared helpers for the HTTP boundary layer.

pub mod staging;
pub mod upload;
