//! Task repository
//!
//! Single-table access for tasks. The foreign key to task_lists is
//! enforced by the database, so creating under a missing list fails
//! with a database error rather than NotFound.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{RecordId, TaskText};

/// Task record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub is_completed: bool,
    pub list_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Storage operations for tasks
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new, uncompleted task under `list_id`.
    async fn create(&self, list_id: RecordId, text: TaskText) -> Result<Task, DbError>;

    async fn get_by_id(&self, id: RecordId) -> Result<Task, DbError>;

    /// Tasks of a list in insertion order. Empty when the list has no
    /// tasks or does not exist.
    async fn get_all_by_list(&self, list_id: RecordId) -> Result<Vec<Task>, DbError>;

    /// Overwrite text and completion state from `task`.
    async fn update(&self, task: Task) -> Result<Task, DbError>;

    /// Returns false when no row matched.
    async fn delete(&self, id: RecordId) -> Result<bool, DbError>;

    /// Set is_completed without touching the text.
    /// Returns false when no row matched.
    async fn mark_as_completed(&self, id: RecordId) -> Result<bool, DbError>;
}

/// PostgreSQL task repository
#[derive(Clone)]
pub struct PgTaskRepo {
    pool: PgPool,
}

impl PgTaskRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepo {
    async fn create(&self, list_id: RecordId, text: TaskText) -> Result<Task, DbError> {
        let task: Task = sqlx::query_as(
            r#"
            INSERT INTO tasks (text, list_id)
            VALUES ($1, $2)
            RETURNING id, text, is_completed, list_id, created_at, updated_at
            "#,
        )
        .bind(text.as_str())
        .bind(list_id.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Task, DbError> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, text, is_completed, list_id, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("task", id))
    }

    async fn get_all_by_list(&self, list_id: RecordId) -> Result<Vec<Task>, DbError> {
        let tasks: Vec<Task> = sqlx::query_as(
            r#"
            SELECT id, text, is_completed, list_id, created_at, updated_at
            FROM tasks
            WHERE list_id = $1
            ORDER BY id
            "#,
        )
        .bind(list_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn update(&self, task: Task) -> Result<Task, DbError> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET text = $2, is_completed = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, text, is_completed, list_id, created_at, updated_at
            "#,
        )
        .bind(task.id)
        .bind(&task.text)
        .bind(task.is_completed)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "task",
            id: task.id.to_string(),
        })
    }

    async fn delete(&self, id: RecordId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn mark_as_completed(&self, id: RecordId) -> Result<bool, DbError> {
        let result = sqlx::query(
            "UPDATE tasks SET is_completed = TRUE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
