//! List repository
//!
//! Lists are always returned with their tasks:
//! - get_all / get_by_id: LEFT JOIN onto tasks (no N+1)
//! - update: CTE update + JOIN in one statement
//! - delete: tasks go with the list via ON DELETE CASCADE

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use super::{DbError, Task};
use crate::models::{ListName, RecordId};

/// Task list record with its tasks in insertion order
#[derive(Debug, Clone, FromRow)]
pub struct TaskList {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub tasks: Vec<Task>,
}

/// Storage operations for task lists
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Insert a new list. The returned list has no tasks.
    async fn create(&self, name: ListName) -> Result<TaskList, DbError>;

    /// All lists in insertion order, each with its tasks.
    async fn get_all(&self) -> Result<Vec<TaskList>, DbError>;

    /// One list with its tasks.
    async fn get_by_id(&self, id: RecordId) -> Result<TaskList, DbError>;

    /// Rename a list.
    async fn update(&self, id: RecordId, name: ListName) -> Result<TaskList, DbError>;

    /// Delete a list and, through the cascade, its tasks.
    /// Returns false when no row matched.
    async fn delete(&self, id: RecordId) -> Result<bool, DbError>;

    async fn exists(&self, id: RecordId) -> Result<bool, DbError>;
}

/// Columns shared by every list query; task columns are NULL for empty lists.
const LIST_WITH_TASKS_COLUMNS: &str = r#"
    l.id, l.name, l.created_at, l.updated_at,
    t.id AS task_id,
    t.text AS task_text,
    t.is_completed AS task_is_completed,
    t.created_at AS task_created_at,
    t.updated_at AS task_updated_at
"#;

/// PostgreSQL list repository
#[derive(Clone)]
pub struct PgListRepo {
    pool: PgPool,
}

impl PgListRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListRepository for PgListRepo {
    async fn create(&self, name: ListName) -> Result<TaskList, DbError> {
        let list: TaskList = sqlx::query_as(
            r#"
            INSERT INTO task_lists (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(list)
    }

    async fn get_all(&self) -> Result<Vec<TaskList>, DbError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {LIST_WITH_TASKS_COLUMNS}
            FROM task_lists l
            LEFT JOIN tasks t ON t.list_id = l.id
            ORDER BY l.id, t.id
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        fold_list_rows(rows)
    }

    async fn get_by_id(&self, id: RecordId) -> Result<TaskList, DbError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {LIST_WITH_TASKS_COLUMNS}
            FROM task_lists l
            LEFT JOIN tasks t ON t.list_id = l.id
            WHERE l.id = $1
            ORDER BY t.id
            "#
        ))
        .bind(id.get())
        .fetch_all(&self.pool)
        .await?;

        fold_list_rows(rows)?
            .pop()
            .ok_or_else(|| DbError::not_found("list", id))
    }

    async fn update(&self, id: RecordId, name: ListName) -> Result<TaskList, DbError> {
        // Single statement: CTE for the update + JOIN for the tasks
        let rows = sqlx::query(&format!(
            r#"
            WITH l AS (
                UPDATE task_lists
                SET name = $2, updated_at = NOW()
                WHERE id = $1
                RETURNING id, name, created_at, updated_at
            )
            SELECT {LIST_WITH_TASKS_COLUMNS}
            FROM l
            LEFT JOIN tasks t ON t.list_id = l.id
            ORDER BY t.id
            "#
        ))
        .bind(id.get())
        .bind(name.as_str())
        .fetch_all(&self.pool)
        .await?;

        fold_list_rows(rows)?
            .pop()
            .ok_or_else(|| DbError::not_found("list", id))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM task_lists WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: RecordId) -> Result<bool, DbError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM task_lists WHERE id = $1)")
                .bind(id.get())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

/// Group joined rows (ordered by list id) into lists with their tasks.
fn fold_list_rows(rows: Vec<PgRow>) -> Result<Vec<TaskList>, DbError> {
    let mut lists: Vec<TaskList> = Vec::new();

    for row in rows {
        let list_id: i64 = row.try_get("id")?;

        if lists.last().map(|l| l.id) != Some(list_id) {
            lists.push(TaskList {
                id: list_id,
                name: row.try_get("name")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
                tasks: Vec::new(),
            });
        }

        let Some(task_id) = row.try_get::<Option<i64>, _>("task_id")? else {
            continue;
        };

        let task = Task {
            id: task_id,
            text: row.try_get("task_text")?,
            is_completed: row.try_get("task_is_completed")?,
            list_id,
            created_at: row.try_get("task_created_at")?,
            updated_at: row.try_get("task_updated_at")?,
        };

        if let Some(list) = lists.last_mut() {
            list.tasks.push(task);
        }
    }

    Ok(lists)
}
