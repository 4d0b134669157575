//! listapro-server: task lists and their tasks over a JSON API
//!
//! Layers, leaf first:
//! - [`models`]: validated input types
//! - [`db`]: pool, schema and the list/task repositories
//! - [`http`]: axum router, extractors and error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DatabaseConfig};
pub use http::{build_router, run_server, AppState, ServerConfig};
