use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::task::{self, NewTask};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{path_id, JsonApiError, StatusMap};
use crate::state::ServerState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl From<task::Model> for TaskResponse {
    fn from(m: task::Model) -> Self {
        Self { id: m.id, title: m.title, description: m.description }
    }
}

#[utoipa::path(
    post, path = "/tasks/", tag = "tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Created", body = TaskResponse),
        (status = 422, description = "Validation Error", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), JsonApiError> {
    let Json(input) = payload.map_err(|r| JsonApiError::from_rejection(r, StatusMap::default()))?;
    let created = state.tasks.create(NewTask { title: input.title, description: input.description }).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get, path = "/tasks/{id}", tag = "tasks",
    params(("id" = i64, Path, description = "Task ID, at most 1000")),
    responses(
        (status = 200, description = "OK", body = TaskResponse),
        (status = 404, description = "Not Found", body = ErrorBody),
        (status = 422, description = "Id above the allowed maximum", body = ErrorBody)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<TaskResponse>, JsonApiError> {
    let id = path_id(id, StatusMap::default())?;
    Ok(Json(state.tasks.get(id).await?.into()))
}
