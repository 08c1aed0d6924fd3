use std::num::IntErrorKind;

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::Violations;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Error body returned by every failing handler.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub title: String,
    pub detail: Option<String>,
    /// Stable numeric code of the service error kind, when one applies.
    pub code: Option<u16>,
    /// Per-field rejections for validation failures.
    #[schema(value_type = Option<Vec<FieldViolation>>)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Violations>,
}

/// Documentation shape of one entry in `violations`.
#[derive(ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<String>,
    pub code: Option<u16>,
    pub violations: Option<Violations>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, title: title.into(), detail, code: None, violations: None }
    }

    /// Translate a service error. Validation and conflict statuses differ
    /// between resources, so the caller supplies them through `map`.
    pub fn from_service(e: ServiceError, map: StatusMap) -> Self {
        let code = Some(e.code());
        let mut out = match e {
            ServiceError::Validation(v) => {
                let mut out = Self::new(map.validation, "Validation Error", Some(v.to_string()));
                out.violations = Some(v);
                out
            }
            ServiceError::Conflict(msg) => Self::new(map.conflict, "Conflict", Some(msg)),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::OutOfRange(msg) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Out Of Range", Some(msg)),
            ServiceError::InconsistentState(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "Inconsistent State", Some(msg))
            }
            ServiceError::Db(msg) => {
                error!(error = %msg, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some("internal storage error".into()))
            }
        };
        out.code = code;
        out
    }

    /// Body, query or path extraction failed; reported with the route's
    /// validation status.
    pub fn from_rejection(rejection: impl std::fmt::Display, map: StatusMap) -> Self {
        let detail = rejection.to_string();
        warn!(error = %detail, "request rejected");
        Self::new(map.validation, "Validation Error", Some(detail))
    }
}

/// Integer id from a `{id}` segment. Values beyond `i64` saturate so the
/// resource's own bounds (task ceiling, i32 ids) decide the outcome.
pub fn path_id(raw: Result<Path<String>, PathRejection>, map: StatusMap) -> Result<i64, JsonApiError> {
    let Path(raw) = raw.map_err(|r| JsonApiError::from_rejection(r, map))?;
    match raw.parse::<i64>() {
        Ok(id) => Ok(id),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(JsonApiError::from_rejection(format!("id must be an integer, got '{raw}'"), map)),
        },
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        Self::from_service(e, StatusMap::default())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { title: self.title, detail: self.detail, code: self.code, violations: self.violations };
        (self.status, Json(body)).into_response()
    }
}

/// HTTP status for the error kinds whose mapping is chosen per resource.
#[derive(Debug, Clone, Copy)]
pub struct StatusMap {
    pub validation: StatusCode,
    pub conflict: StatusCode,
}

impl Default for StatusMap {
    fn default() -> Self {
        Self { validation: StatusCode::UNPROCESSABLE_ENTITY, conflict: StatusCode::CONFLICT }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("schema migration failed: {0}")]
    Migration(#[from] sea_orm::DbErr),
    #[error("cannot bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_status_follows_the_map() {
        let e = ServiceError::Conflict("Email already registered".into());
        let map = StatusMap { conflict: StatusCode::UNPROCESSABLE_ENTITY, ..StatusMap::default() };
        let out = JsonApiError::from_service(e, map);
        assert_eq!(out.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(out.detail.as_deref(), Some("Email already registered"));
        assert_eq!(out.code, Some(1002));
    }

    #[test]
    fn storage_errors_hide_driver_text() {
        let out = JsonApiError::from(ServiceError::Db("connection reset by peer".into()));
        assert_eq!(out.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!out.detail.unwrap_or_default().contains("peer"));
    }

    #[test]
    fn path_ids_saturate_instead_of_failing() {
        let ok = |s: &str| path_id(Ok(Path(s.to_string())), StatusMap::default()).unwrap();
        assert_eq!(ok("42"), 42);
        assert_eq!(ok("99999999999999999999"), i64::MAX);
        assert_eq!(ok("-99999999999999999999"), i64::MIN);

        let err = path_id(Ok(Path("abc".into())), StatusMap::default()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        let map = StatusMap { validation: StatusCode::BAD_REQUEST, ..StatusMap::default() };
        assert_eq!(path_id(Ok(Path("1.5".into())), map).unwrap_err().status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn default_mapping() {
        let cases = [
            (ServiceError::Validation(Violations::new()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::not_found("task", 3), StatusCode::NOT_FOUND),
            (ServiceError::OutOfRange("too big".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::InconsistentState("bad row".into()), StatusCode::BAD_REQUEST),
        ];
        for (e, status) in cases {
            assert_eq!(JsonApiError::from(e).status, status);
        }
    }
}
