//! Arcanum Store - SQLite persistence for the Arcanum entities
//!
//! Provides:
//! - Backend configuration and the connection factory
//! - Embedded, checksummed schema migrations
//! - The generic repository with per-relationship cascade policies
//! - Entity-specific query extensions

pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod queries;
pub mod repo;

// Re-export key types
pub use crate::config::BackendConfig;
pub use crate::db::ConnectionFactory;
pub use errors::Result;
pub use repo::{CrudRepository, Entity, Repository};
