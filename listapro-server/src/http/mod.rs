//! HTTP server layer
//!
//! Axum server with:
//! - CORS for browser clients
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
