//! Router harness for handler tests

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use super::server::{build_router, AppState};
use crate::db::memory::MemoryStore;

/// Full router wired to an in-memory store
pub(crate) struct TestApp {
    pub store: MemoryStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }

    pub fn router(&self) -> Router {
        let store = Arc::new(self.store.clone());
        build_router(AppState::new(store.clone(), store))
    }

    /// Send a request and return the status with the decoded JSON body
    /// (`Value::Null` for empty bodies).
    pub async fn send(&self, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if body.is_some() {
            request = request.header("content-type", "application/json");
        }
        let request = request
            .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    /// Create a list through the API and return its id
    pub async fn create_list(&self, name: &str) -> i64 {
        let body = serde_json::json!({ "name": name }).to_string();
        let (status, json) = self.send("POST", "/api/lists", Some(&body)).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["id"].as_i64().unwrap()
    }

    /// Create a task through the API and return its id
    pub async fn create_task(&self, list_id: i64, text: &str) -> i64 {
        let body = serde_json::json!({ "text": text }).to_string();
        let uri = format!("/api/lists/{list_id}/tasks");
        let (status, json) = self.send("POST", &uri, Some(&body)).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["id"].as_i64().unwrap()
    }
}
