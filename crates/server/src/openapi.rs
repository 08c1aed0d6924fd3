use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::errors::{ErrorBody, FieldViolation};
use crate::routes::animals::{AnimalResponse, CreateAnimalRequest};
use crate::routes::cabinets::{CabinetResponse, CreateCabinetRequest, StudentResponse};
use crate::routes::participants::{CreateParticipantRequest, ParticipantResponse};
use crate::routes::students::{CreateStudentRequest, StudentCreatedResponse};
use crate::routes::tasks::{CreateTaskRequest, TaskResponse};

/// Documentation shape of `common::types::Health`.
#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cabinets::create,
        crate::routes::cabinets::list,
        crate::routes::cabinets::get,
        crate::routes::cabinets::delete,
        crate::routes::students::create,
        crate::routes::participants::create,
        crate::routes::participants::list_by_event,
        crate::routes::animals::create,
        crate::routes::animals::get,
        crate::routes::animals::list,
        crate::routes::tasks::create,
        crate::routes::tasks::get,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            FieldViolation,
            CreateCabinetRequest,
            CabinetResponse,
            StudentResponse,
            CreateStudentRequest,
            StudentCreatedResponse,
            CreateParticipantRequest,
            ParticipantResponse,
            CreateAnimalRequest,
            AnimalResponse,
            CreateTaskRequest,
            TaskResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "cabinets"),
        (name = "participants"),
        (name = "animals"),
        (name = "tasks")
    )
)]
pub struct ApiDoc;
