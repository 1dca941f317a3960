use crate::serializer::{EntityKind, ShapeError};
use entity::validation::ValidationErrors;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more guarded fields were rejected before any write
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
