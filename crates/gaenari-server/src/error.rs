//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce the error form of the response
//! envelope with an appropriate HTTP status code.

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use gaenari_core::{CoreError, ProgramId};
use gaenari_storage::StorageError;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Registering a favorite for a program that does not exist (404).
    #[error("cannot register favorite: program {0} not found")]
    FavoriteCreateFailed(ProgramId),

    /// Clearing a favorite for a program that does not exist (404).
    #[error("cannot clear favorite: program {0} not found")]
    FavoriteDeleteFailed(ProgramId),

    /// A stored program carries a type code the projection cannot handle (500).
    #[error("unexpected program type: '{0}'")]
    UnexpectedProgramType(String),

    /// The `User-Info` header is missing or blank (400).
    #[error("missing User-Info header")]
    MissingUserInfo,

    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::FavoriteCreateFailed(_)
            | ApiError::FavoriteDeleteFailed(_)
            | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MissingUserInfo | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnexpectedProgramType(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine-readable error code carried in the envelope.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::FavoriteCreateFailed(_) => "FAVORITE_CREATE_FAILED",
            ApiError::FavoriteDeleteFailed(_) => "FAVORITE_DELETE_FAILED",
            ApiError::UnexpectedProgramType(_) => "UNEXPECTED_PROGRAM_TYPE",
            ApiError::MissingUserInfo => "MISSING_USER_INFO",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!(code = code, "{}", self);
        } else {
            tracing::warn!(code = code, "{}", self);
        }

        let body = serde_json::json!({
            "success": false,
            "status": status.as_u16(),
            "code": code,
            "message": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownProgramType { code } => ApiError::UnexpectedProgramType(code),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ProgramNotFound(id) => {
                ApiError::NotFound(format!("program {}", id))
            }
            StorageError::InvalidProgram(core) => core.into(),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_failures_are_not_found() {
        assert_eq!(
            ApiError::FavoriteCreateFailed(ProgramId(1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::FavoriteDeleteFailed(ProgramId(1)).code(),
            "FAVORITE_DELETE_FAILED"
        );
    }

    #[test]
    fn unknown_program_type_maps_to_internal_error() {
        let err: ApiError = CoreError::UnknownProgramType { code: "X".into() }.into();
        assert!(matches!(err, ApiError::UnexpectedProgramType(ref c) if c == "X"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_program_is_bad_request() {
        let err: ApiError = StorageError::InvalidProgram(CoreError::InvalidSetCount(0)).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failures_are_internal() {
        let err: ApiError = StorageError::Migration("boom".into()).into();
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }
}
