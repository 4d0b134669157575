//! List endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::tasks::TaskResponse;
use crate::db::repos::TaskList;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::ListName;

/// Create/rename list request
#[derive(Deserialize)]
pub struct ListRequest {
    pub name: String,
}

/// List response, tasks included
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub id: i64,
    pub name: String,
    pub tasks: Vec<TaskResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TaskList> for ListResponse {
    fn from(l: TaskList) -> Self {
        Self {
            id: l.id,
            name: l.name,
            tasks: l.tasks.into_iter().map(TaskResponse::from).collect(),
            created_at: l.created_at.to_rfc3339(),
            updated_at: l.updated_at.to_rfc3339(),
        }
    }
}

/// GET /lists - all lists with their tasks
async fn list_lists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ListResponse>>, ApiError> {
    let lists = state.lists.get_all().await?;
    Ok(Json(lists.into_iter().map(ListResponse::from).collect()))
}

/// POST /lists - create a new list
async fn create_list(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ListRequest>,
) -> Result<(StatusCode, Json<ListResponse>), ApiError> {
    let name = ListName::new(&req.name)?;
    let list = state.lists.create(name).await?;
    tracing::debug!(list_id = list.id, "list created");

    Ok((StatusCode::CREATED, Json(ListResponse::from(list))))
}

/// PUT /lists/{id} - rename a list
async fn update_list(
    ValidId(id): ValidId,
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ListRequest>,
) -> Result<Json<ListResponse>, ApiError> {
    let name = ListName::new(&req.name)?;

    if !state.lists.exists(id).await? {
        return Err(ApiError::NotFound {
            resource: "list",
            id: id.to_string(),
        });
    }

    let list = state.lists.update(id, name).await?;
    Ok(Json(ListResponse::from(list)))
}

/// DELETE /lists/{id} - delete a list and its tasks
async fn delete_list(
    ValidId(id): ValidId,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    if !state.lists.delete(id).await? {
        return Err(ApiError::NotFound {
            resource: "list",
            id: id.to_string(),
        });
    }

    tracing::debug!(list_id = %id, "list deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// List routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lists", get(list_lists).post(create_list))
        .route("/lists/{id}", put(update_list).delete(delete_list))
}
