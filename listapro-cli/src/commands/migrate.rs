//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use listapro_server::db::{create_pool_with_options, migrations};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the listapro tables and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let db_config = args.db.config()?;

    let pool = create_pool_with_options(&db_config, args.db.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
