use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::participant::{self, NewParticipant};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{JsonApiError, StatusMap};
use crate::state::ServerState;

/// A taken email is reported as 422, like any other invalid registration.
const STATUS: StatusMap = StatusMap { validation: StatusCode::UNPROCESSABLE_ENTITY, conflict: StatusCode::UNPROCESSABLE_ENTITY };

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateParticipantRequest {
    pub name: String,
    pub email: String,
    pub event: String,
    pub age: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipantResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub event: String,
    pub age: i32,
}

impl From<participant::Model> for ParticipantResponse {
    fn from(m: participant::Model) -> Self {
        Self { id: m.id, name: m.name, email: m.email, event: m.event, age: m.age }
    }
}

#[utoipa::path(
    post, path = "/participants/", tag = "participants",
    request_body = CreateParticipantRequest,
    responses(
        (status = 201, description = "Registered", body = ParticipantResponse),
        (status = 422, description = "Validation Error or email already registered", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateParticipantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ParticipantResponse>), JsonApiError> {
    let Json(input) = payload.map_err(|r| JsonApiError::from_rejection(r, STATUS))?;
    let created = state
        .participants
        .create(NewParticipant { name: input.name, email: input.email, event: input.event, age: input.age })
        .await
        .map_err(|e| JsonApiError::from_service(e, STATUS))?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get, path = "/participants/event/{event_name}", tag = "participants",
    params(("event_name" = String, Path, description = "Event name")),
    responses((status = 200, description = "Participants of the event, possibly none", body = [ParticipantResponse]))
)]
pub async fn list_by_event(
    State(state): State<ServerState>,
    Path(event_name): Path<String>,
) -> Result<Json<Vec<ParticipantResponse>>, JsonApiError> {
    let rows = state.participants.list_by_event(&event_name).await?;
    Ok(Json(rows.into_iter().map(ParticipantResponse::from).collect()))
}
