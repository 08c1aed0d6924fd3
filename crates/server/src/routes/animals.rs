use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::animal::{self, NewAnimal};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{path_id, JsonApiError, StatusMap};
use crate::state::ServerState;

/// Any invalid animal input is a 400.
const STATUS: StatusMap = StatusMap { validation: StatusCode::BAD_REQUEST, conflict: StatusCode::CONFLICT };

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAnimalRequest {
    pub name: String,
    pub age: i64,
    #[serde(default)]
    pub adopted: bool,
    /// Defaults to "healthy".
    pub health_status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnimalResponse {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub adopted: bool,
    pub health_status: String,
}

impl From<animal::Model> for AnimalResponse {
    fn from(m: animal::Model) -> Self {
        Self { id: m.id, name: m.name, age: m.age, adopted: m.adopted, health_status: m.health_status }
    }
}

#[utoipa::path(
    post, path = "/animals/", tag = "animals",
    request_body = CreateAnimalRequest,
    responses(
        (status = 201, description = "Created", body = AnimalResponse),
        (status = 400, description = "Validation Error", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateAnimalRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AnimalResponse>), JsonApiError> {
    let Json(input) = payload.map_err(|r| JsonApiError::from_rejection(r, STATUS))?;
    let created = state
        .animals
        .create(NewAnimal { name: input.name, age: input.age, adopted: input.adopted, health_status: input.health_status })
        .await
        .map_err(|e| JsonApiError::from_service(e, STATUS))?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get, path = "/animals/{id}", tag = "animals",
    params(("id" = i64, Path, description = "Animal ID")),
    responses(
        (status = 200, description = "OK", body = AnimalResponse),
        (status = 400, description = "Stored row is inconsistent", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<AnimalResponse>, JsonApiError> {
    let id = path_id(id, STATUS)?;
    Ok(Json(state.animals.get(id).await?.into()))
}

#[utoipa::path(
    get, path = "/animals/", tag = "animals",
    responses((status = 200, description = "OK", body = [AnimalResponse]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<AnimalResponse>>, JsonApiError> {
    let rows = state.animals.list().await?;
    Ok(Json(rows.into_iter().map(AnimalResponse::from).collect()))
}
