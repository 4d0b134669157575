//! Command implementations for the listapro CLI

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use listapro_server::DatabaseConfig;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database connection arguments shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (overrides DB_HOST/DB_PORT/DB_USER/DB_PASSWORD/DB_NAME/DB_SSLMODE)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum connections in the pool
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Resolve the database config from flags and environment
    pub fn config(&self) -> Result<DatabaseConfig> {
        let mut config =
            DatabaseConfig::from_env().context("Invalid database configuration")?;

        if let Some(url) = &self.database_url {
            config.url = Some(url.clone());
        }

        Ok(config)
    }
}
