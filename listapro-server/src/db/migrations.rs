//! Schema migrations for task lists and tasks
//!
//! Every statement is idempotent, so `run` is safe on every startup.

use sqlx::PgPool;

use super::repos::DbError;

/// Create tables and indexes if they don't exist
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running listapro migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS task_lists (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL CHECK (name <> ''),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id BIGSERIAL PRIMARY KEY,
            text TEXT NOT NULL CHECK (text <> ''),
            is_completed BOOLEAN NOT NULL DEFAULT FALSE,
            list_id BIGINT NOT NULL REFERENCES task_lists(id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_list_id ON tasks(list_id)")
        .execute(pool)
        .await?;

    tracing::info!("listapro migrations complete");
    Ok(())
}
