//! Task endpoints
//!
//! Tasks are created and listed under their list, and updated or deleted
//! by their own id. Updates are partial: only fields present in the body
//! change.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::Task;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::{TaskText, ValidationError};

/// Create task request
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub text: String,
}

/// Partial task update. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub text: Option<String>,
    pub is_completed: Option<bool>,
}

/// A patch whose fields have passed validation
#[derive(Debug)]
struct ValidTaskPatch {
    text: Option<TaskText>,
    is_completed: Option<bool>,
}

impl TaskPatch {
    fn validate(self) -> Result<ValidTaskPatch, ValidationError> {
        Ok(ValidTaskPatch {
            text: self.text.as_deref().map(TaskText::new).transpose()?,
            is_completed: self.is_completed,
        })
    }
}

impl ValidTaskPatch {
    fn apply(self, mut task: Task) -> Task {
        if let Some(text) = self.text {
            task.text = text.into_string();
        }
        if let Some(done) = self.is_completed {
            task.is_completed = done;
        }
        task
    }
}

/// Task response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i64,
    pub text: String,
    pub is_completed: bool,
    pub list_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            text: t.text,
            is_completed: t.is_completed,
            list_id: t.list_id,
            created_at: t.created_at.to_rfc3339(),
            updated_at: t.updated_at.to_rfc3339(),
        }
    }
}

/// GET /lists/{id}/tasks - tasks of a list, empty when the list has none
async fn list_tasks(
    ValidId(list_id): ValidId,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.tasks.get_all_by_list(list_id).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// POST /lists/{id}/tasks - create a task in a list
async fn create_task(
    ValidId(list_id): ValidId,
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let text = TaskText::new(&req.text)?;
    let task = state.tasks.create(list_id, text).await?;
    tracing::debug!(task_id = task.id, list_id = task.list_id, "task created");

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// PUT /tasks/{id} - merge the provided fields into a task
async fn update_task(
    ValidId(id): ValidId,
    State(state): State<Arc<AppState>>,
    JsonBody(patch): JsonBody<TaskPatch>,
) -> Result<Json<TaskResponse>, ApiError> {
    let patch = patch.validate()?;

    let current = state.tasks.get_by_id(id).await?;
    let task = state.tasks.update(patch.apply(current)).await?;

    Ok(Json(TaskResponse::from(task)))
}

/// DELETE /tasks/{id} - delete a task
async fn delete_task(
    ValidId(id): ValidId,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    if !state.tasks.delete(id).await? {
        return Err(ApiError::NotFound {
            resource: "task",
            id: id.to_string(),
        });
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Task routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lists/{id}/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
}
