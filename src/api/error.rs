//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::forum::ForumError;
use crate::journal::JournalError;
use crate::mood::MoodError;
use crate::resources::ResourceError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forum error: {0}")]
    Forum(#[from] ForumError),

    #[error("Tracker error: {0}")]
    Mood(#[from] MoodError),

    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// HTTP status and machine-readable code
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Forum(ForumError::CommentNotFound(_)) => {
                (StatusCode::NOT_FOUND, "COMMENT_NOT_FOUND")
            }
            ApiError::Forum(_) => (StatusCode::BAD_REQUEST, "FORUM_ERROR"),
            ApiError::Mood(_) => (StatusCode::BAD_REQUEST, "TRACKER_ERROR"),
            ApiError::Journal(JournalError::EntryNotFound(_)) => {
                (StatusCode::NOT_FOUND, "ENTRY_NOT_FOUND")
            }
            ApiError::Journal(_) => (StatusCode::BAD_REQUEST, "JOURNAL_ERROR"),
            ApiError::Resource(ResourceError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "RESOURCE_NOT_FOUND")
            }
            ApiError::Resource(_) => (StatusCode::BAD_REQUEST, "RESOURCE_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants_map_to_404() {
        let errors = [
            ApiError::from(ForumError::CommentNotFound(1)),
            ApiError::from(JournalError::EntryNotFound(1)),
            ApiError::from(ResourceError::NotFound(1)),
            ApiError::NotFound("x".into()),
        ];
        for err in errors {
            assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND, "{err}");
        }
    }

    #[test]
    fn test_parse_errors_map_to_400() {
        let errors = [
            ApiError::from(ForumError::UnknownCategory("x".into())),
            ApiError::from(MoodError::LevelOutOfRange(9)),
            ApiError::from(JournalError::NothingSelected),
            ApiError::from(ResourceError::UnknownType("x".into())),
        ];
        for err in errors {
            assert_eq!(err.status_and_code().0, StatusCode::BAD_REQUEST, "{err}");
        }
    }
}
