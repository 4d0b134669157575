//! Console logging for the listapro CLI
//!
//! `RUST_LOG` replaces the built-in directives entirely, e.g.
//! `RUST_LOG=sqlx=debug,tower_http=trace listapro serve`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Our crates and request traces at info, sqlx kept quiet.
const DEFAULT_DIRECTIVES: &str = "listapro=info,listapro_server=info,tower_http=info,sqlx=warn";

/// `--debug` opens up our crates and the per-request spans.
const DEBUG_DIRECTIVES: &str = "listapro=debug,listapro_server=debug,tower_http=debug,sqlx=info";

fn directives(debug: bool, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim).filter(|v| !v.is_empty()) {
        Some(custom) => custom.to_string(),
        None if debug => DEBUG_DIRECTIVES.to_string(),
        None => DEFAULT_DIRECTIVES.to_string(),
    }
}

/// Install the global compact subscriber.
pub fn init(debug: bool) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(directives(debug, rust_log.as_deref()))
        .map_err(|err| anyhow!("invalid {}: {}", EnvFilter::DEFAULT_ENV, err))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
