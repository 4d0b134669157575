//! Axum server setup
//!
//! Server skeleton with:
//! - CORS for any origin (GET/POST/PUT/DELETE)
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, Method};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::repos::{ListRepository, PgListRepo, PgTaskRepo, TaskRepository};

/// How long browsers may cache a preflight response
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

/// Shared application state.
///
/// Repositories are built once at startup and injected here; handlers
/// never reach for a global connection.
#[derive(Clone)]
pub struct AppState {
    pub lists: Arc<dyn ListRepository>,
    pub tasks: Arc<dyn TaskRepository>,
}

impl AppState {
    pub fn new(lists: Arc<dyn ListRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { lists, tasks }
    }

    /// State backed by the PostgreSQL repositories
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgListRepo::new(pool.clone())),
            Arc::new(PgTaskRepo::new(pool)),
        )
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(CORS_MAX_AGE)
}

/// Build the application router with all routes.
///
/// Resource routes live under `/api`; `/health` sits at the root.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::lists::router())
        .merge(routes::tasks::router());

    Router::new()
        .merge(routes::health::router())
        .nest("/api", api)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::from_env()?).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(AppState::from_pool(pool));

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
