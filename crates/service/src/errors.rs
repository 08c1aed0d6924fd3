use models::errors::{ModelError, Violations};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(Violations),
    /// A unique field is already taken.
    #[error("{0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Input outside an allowed bound, rejected before any storage access.
    #[error("{0}")]
    OutOfRange(String),
    /// Stored data breaks an invariant enforced at write time.
    #[error("inconsistent state: {0}")]
    InconsistentState(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{entity} with id={id} not found"))
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::OutOfRange(_) => 1004,
            ServiceError::InconsistentState(_) => 1005,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(v) => ServiceError::Validation(v),
            ModelError::Duplicate(msg) => ServiceError::Conflict(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ModelError::from(e).into()
    }
}

impl From<common::pagination::PaginationError> for ServiceError {
    fn from(e: common::pagination::PaginationError) -> Self {
        let mut v = Violations::new();
        v.push("limit", e.to_string());
        ServiceError::Validation(v)
    }
}
