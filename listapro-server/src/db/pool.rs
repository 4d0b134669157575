//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::{ConfigError, DatabaseConfig};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Pool creation error
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the config is invalid or the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::from_env()?).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    create_pool_with_options(config, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    config: &DatabaseConfig,
    max_connections: u32,
) -> Result<PgPool, PoolError> {
    let options = config.connect_options()?;
    tracing::debug!(max_connections, "connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}
