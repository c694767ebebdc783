//! Database repositories for data access layer
//!
//! This module contains all repository implementations for database operations.
//! Each repository is responsible for a specific domain entity; traits abstract
//! the PostgreSQL implementation so tests can run without a database.
//
// User accounts
pub mod users;
//
// Video metadata
pub mod videos;
//
// Database-free implementations (development and tests)
pub mod memory;

pub use memory::{MemoryUserRepository, MemoryVideoRepository};
pub use users::{PostgresUserRepository, UserRepositoryTrait};
pub use videos::{PostgresVideoRepository, VideoRepositoryTrait};
