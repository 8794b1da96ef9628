//! Common API response wrapper types.
//!
//! [`ApiResponse`] is the envelope for all successful API responses. The error
//! form of the envelope is produced by [`crate::error::ApiError`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Outcome codes for successful responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    FavoriteProgramListFetched,
    FavoriteProgramUpdated,
    FavoriteProgramDeleted,
}

impl ResponseCode {
    pub fn status(self) -> StatusCode {
        StatusCode::OK
    }

    pub fn code(self) -> &'static str {
        match self {
            ResponseCode::FavoriteProgramListFetched => "FAVORITE_PROGRAM_LIST_FETCHED",
            ResponseCode::FavoriteProgramUpdated => "FAVORITE_PROGRAM_UPDATED",
            ResponseCode::FavoriteProgramDeleted => "FAVORITE_PROGRAM_DELETED",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ResponseCode::FavoriteProgramListFetched => "favorite programs fetched",
            ResponseCode::FavoriteProgramUpdated => "program added to favorites",
            ResponseCode::FavoriteProgramDeleted => "program removed from favorites",
        }
    }
}

/// Standard API response envelope.
///
/// `success` is always `true` here; `status` repeats the HTTP status code so
/// clients that only see the body can still branch on it.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub status: u16,
    pub code: &'static str,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps `data` in a successful envelope for `code`.
    pub fn success(code: ResponseCode, data: T) -> Self {
        ApiResponse {
            success: true,
            status: code.status().as_u16(),
            code: code.code(),
            message: code.message(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, axum::Json(self)).into_response()
    }
}
