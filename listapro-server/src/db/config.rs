//! Database configuration - environment loading
//!
//! Configuration is loaded from environment variables:
//! - `DATABASE_URL`: full connection string, takes precedence when set
//! - `DB_HOST` (default: localhost), `DB_PORT` (default: 5432)
//! - `DB_USER` (default: postgres), `DB_PASSWORD` (optional)
//! - `DB_NAME` (default: listapro), `DB_SSLMODE` (default: disable)

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid DB_PORT '{value}': expected a port number")]
    InvalidPort { value: String },

    #[error("invalid DB_SSLMODE '{value}'")]
    InvalidSslMode { value: String },

    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

/// Database connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection string; when set the discrete fields are ignored
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
    pub ssl_mode: PgSslMode,
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => 5432,
        };

        let ssl_mode = match var("DB_SSLMODE") {
            Some(raw) => PgSslMode::from_str(raw.trim())
                .map_err(|_| ConfigError::InvalidSslMode { value: raw })?,
            None => PgSslMode::Disable,
        };

        Ok(Self {
            url: var("DATABASE_URL"),
            host: var("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port,
            user: var("DB_USER").unwrap_or_else(|| "postgres".to_string()),
            password: var("DB_PASSWORD"),
            database: var("DB_NAME").unwrap_or_else(|| "listapro".to_string()),
            ssl_mode,
        })
    }

    /// Create config pointing at a connection string
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Build sqlx connect options from this config
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(ConfigError::InvalidUrl);
        }

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database)
            .ssl_mode(self.ssl_mode);

        Ok(match &self.password {
            Some(password) => options.password(password),
            None => options,
        })
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: None,
            database: "listapro".to_string(),
            ssl_mode: PgSslMode::Disable,
        }
    }
}
