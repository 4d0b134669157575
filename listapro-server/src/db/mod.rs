//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared by every repository - no global handle
//! - List reads load tasks with a JOIN - no N+1 queries
//! - Every operation is a single statement
//! - Cascading deletes are enforced by the schema

pub mod config;
pub mod migrations;
pub mod pool;
pub mod repos;

#[cfg(test)]
pub(crate) mod memory;

pub use config::{ConfigError, DatabaseConfig};
pub use pool::{create_pool, create_pool_with_options, PoolError};
pub use repos::*;
