use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mission_control_service::{EntityKind, ServiceError};
use serde_json::json;
use tracing::error;

/// Everything a handler can fail with, already reduced to what the client
/// is allowed to see.
#[derive(Debug)]
pub enum ApiError {
    Validation,
    NotFound(EntityKind),
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(_) => Self::Validation,
            ServiceError::NotFound(kind) => Self::NotFound(kind),
            err @ (ServiceError::Shape(_) | ServiceError::Json(_) | ServiceError::Db(_)) => {
                error!(error = %err, "request failed");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Validation => json!({ "errors": ["validation errors"] }),
            Self::NotFound(kind) => json!({ "error": format!("{kind} not found") }),
            Self::Internal => json!({ "error": "internal server error" }),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
