use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use models::student::NewStudent;
use serde::{Deserialize, Serialize};
use service::cabinet::StudentWithCabinet;
use utoipa::ToSchema;

use crate::errors::{JsonApiError, StatusMap};
use crate::routes::cabinets::CabinetResponse;
use crate::state::ServerState;

/// Exactly one of `cabinet_name` / `cabinet_number` identifies the cabinet.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub full_name: String,
    pub cabinet_name: Option<String>,
    pub cabinet_number: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentCreatedResponse {
    pub id: i32,
    pub full_name: String,
    pub cabinet: CabinetResponse,
}

impl From<StudentWithCabinet> for StudentCreatedResponse {
    fn from(s: StudentWithCabinet) -> Self {
        Self { id: s.student.id, full_name: s.student.full_name, cabinet: s.cabinet.into() }
    }
}

#[utoipa::path(
    post, path = "/students/", tag = "cabinets",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Created", body = StudentCreatedResponse),
        (status = 404, description = "Cabinet not found", body = ErrorBody),
        (status = 422, description = "Validation Error", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentCreatedResponse>), JsonApiError> {
    let Json(input) = payload.map_err(|r| JsonApiError::from_rejection(r, StatusMap::default()))?;
    let created = state
        .cabinets
        .create_student(NewStudent {
            full_name: input.full_name,
            cabinet_name: input.cabinet_name,
            cabinet_number: input.cabinet_number,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}
