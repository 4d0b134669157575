//! Repository interfaces and their PostgreSQL implementations
//!
//! Each repository is the only component that touches its table.
//! Handlers depend on the traits, so the store can be swapped in tests.

pub mod lists;
pub mod tasks;

pub use lists::{ListRepository, PgListRepo, TaskList};
pub use tasks::{PgTaskRepo, Task, TaskRepository};

use crate::models::RecordId;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: RecordId) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
