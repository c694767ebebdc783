//! Data models for the application
//!
//! Record structs mirror store rows; the `*Response` structs are the wire
//! DTOs (camelCase keys, no credential material) built via `From`
//! conversions.

mod user;
mod video;

pub use user::*;
pub use video::*;
