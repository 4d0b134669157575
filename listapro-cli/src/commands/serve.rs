//! HTTP server command for the listapro API

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use listapro_server::db::{create_pool_with_options, migrations};
use listapro_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Don't create missing tables on startup
    #[arg(long)]
    pub skip_migrations: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db.config()?;
    let bind_addr = SocketAddr::new(args.host, args.port);

    tracing::info!("Starting listapro server on {}", bind_addr);

    // Create database pool
    let pool = create_pool_with_options(&db_config, args.db.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.skip_migrations {
        tracing::info!("Skipping migrations");
    } else {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    // Run server (blocks until shutdown)
    run_server(pool, ServerConfig { bind_addr })
        .await
        .context("Server error")?;

    Ok(())
}
