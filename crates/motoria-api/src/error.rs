use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Unauthorized(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<motoria_storage::error::StorageError> for ApiError {
    fn from(e: motoria_storage::error::StorageError) -> Self {
        use motoria_storage::error::StorageError;
        match e {
            StorageError::NotFound { key } => ApiError::NotFound(format!("object not found: {key}")),
            StorageError::PreconditionFailed { .. } => {
                ApiError::Conflict("record was modified concurrently".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<motoria_auth::error::AuthError> for ApiError {
    fn from(e: motoria_auth::error::AuthError) -> Self {
        use motoria_auth::error::AuthError;
        match e {
            AuthError::TokenExpired => ApiError::Unauthorized("token expired".to_string()),
            AuthError::InvalidToken(msg) => ApiError::Unauthorized(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<motoria_classifier::error::ClassifierError> for ApiError {
    fn from(e: motoria_classifier::error::ClassifierError) -> Self {
        use motoria_classifier::error::ClassifierError;
        match e {
            ClassifierError::UnsupportedImageFormat(name) => {
                ApiError::BadRequest(format!("unsupported image format: {name}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<motoria_scoring::error::ScoringError> for ApiError {
    fn from(e: motoria_scoring::error::ScoringError) -> Self {
        use motoria_scoring::error::ScoringError;
        match e {
            ScoringError::NoAnswersSelected => ApiError::NotFound(e.to_string()),
        }
    }
}

impl From<motoria_core::error::CoreError> for ApiError {
    fn from(e: motoria_core::error::CoreError) -> Self {
        use motoria_core::error::CoreError;
        match e {
            CoreError::AlreadySubmitted => {
                ApiError::Conflict("test result already submitted".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
