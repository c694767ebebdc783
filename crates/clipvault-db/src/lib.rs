//! ClipVault Database Library
//!
//! This crate provides the data access layer for ClipVault. Repositories wrap
//! a PostgreSQL pool and expose the queries the service needs; each repository
//! also has a trait so callers can swap in database-free implementations for
//! testing.

pub mod db;

pub use db::{
    MemoryUserRepository, MemoryVideoRepository, PostgresUserRepository, PostgresVideoRepository,
    UserRepositoryTrait, VideoRepositoryTrait,
};
