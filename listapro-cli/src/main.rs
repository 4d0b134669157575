//! listapro CLI - runs the task list API
//!
//! Subcommands:
//! - `serve`: run migrations, then serve the HTTP API
//! - `migrate`: create the tables and exit
//!
//! Configuration comes from flags, the environment, and an optional `.env`
//! file in the working directory.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::migrate::MigrateArgs;
use commands::serve::ServeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "listapro",
    author,
    version,
    about = "Task lists and tasks over a JSON HTTP API backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),

    /// Create the database tables and exit
    Migrate(MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so clap's env fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
    }
}
