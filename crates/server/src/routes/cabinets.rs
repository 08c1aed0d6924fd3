use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use common::pagination::Page;
use models::cabinet::{self, NewCabinet};
use models::student;
use serde::{Deserialize, Serialize};
use service::cabinet::CabinetWithStudents;
use utoipa::{IntoParams, ToSchema};

use crate::errors::{path_id, JsonApiError, StatusMap};
use crate::state::ServerState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCabinetRequest {
    pub name: String,
    pub number: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCabinetsQuery {
    /// Rows to skip (default 0).
    pub offset: Option<u64>,
    /// Rows to return (default 20, capped at 100).
    pub limit: Option<u64>,
    /// Embed each cabinet's students (default true).
    pub include_students: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: i32,
    pub full_name: String,
    pub cabinet_id: i32,
}

impl From<student::Model> for StudentResponse {
    fn from(m: student::Model) -> Self {
        Self { id: m.id, full_name: m.full_name, cabinet_id: m.cabinet_id }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CabinetResponse {
    pub id: i32,
    pub name: String,
    pub number: i32,
    /// Omitted when students were not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<StudentResponse>>,
}

impl From<cabinet::Model> for CabinetResponse {
    fn from(m: cabinet::Model) -> Self {
        Self { id: m.id, name: m.name, number: m.number, students: None }
    }
}

impl From<CabinetWithStudents> for CabinetResponse {
    fn from(c: CabinetWithStudents) -> Self {
        Self {
            students: c.students.map(|s| s.into_iter().map(StudentResponse::from).collect()),
            ..Self::from(c.cabinet)
        }
    }
}

#[utoipa::path(
    post, path = "/cabinets/", tag = "cabinets",
    request_body = CreateCabinetRequest,
    responses(
        (status = 201, description = "Created", body = CabinetResponse),
        (status = 409, description = "Name or number already taken", body = ErrorBody),
        (status = 422, description = "Validation Error", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateCabinetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CabinetResponse>), JsonApiError> {
    let Json(input) = payload.map_err(|r| JsonApiError::from_rejection(r, StatusMap::default()))?;
    let created = state.cabinets.create(NewCabinet { name: input.name, number: input.number }).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get, path = "/cabinets/", tag = "cabinets",
    params(ListCabinetsQuery),
    responses(
        (status = 200, description = "OK", body = [CabinetResponse]),
        (status = 422, description = "Invalid pagination", body = ErrorBody)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListCabinetsQuery>, QueryRejection>,
) -> Result<Json<Vec<CabinetResponse>>, JsonApiError> {
    let Query(q) = query.map_err(|r| JsonApiError::from_rejection(r, StatusMap::default()))?;
    let page = Page::new(q.offset, q.limit).map_err(service::errors::ServiceError::from)?;
    let cabinets = state.cabinets.list(page, q.include_students.unwrap_or(true)).await?;
    Ok(Json(cabinets.into_iter().map(CabinetResponse::from).collect()))
}

#[utoipa::path(
    get, path = "/cabinets/{id}", tag = "cabinets",
    params(("id" = i64, Path, description = "Cabinet ID")),
    responses(
        (status = 200, description = "OK", body = CabinetResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<CabinetResponse>, JsonApiError> {
    let id = path_id(id, StatusMap::default())?;
    Ok(Json(state.cabinets.get(id).await?.into()))
}

#[utoipa::path(
    delete, path = "/cabinets/{id}", tag = "cabinets",
    params(("id" = i64, Path, description = "Cabinet ID")),
    responses(
        (status = 204, description = "Deleted together with its students"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = path_id(id, StatusMap::default())?;
    state.cabinets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
