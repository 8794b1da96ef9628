//! Request header helpers.

use axum::http::HeaderMap;

use gaenari_core::MemberId;

use crate::error::ApiError;

/// Header carrying the caller's member id, set by the gateway after
/// authentication.
pub const USER_INFO_HEADER: &str = "User-Info";

/// Extracts the member id from the `User-Info` HTTP header.
///
/// Returns `ApiError::MissingUserInfo` if the header is missing, blank or not
/// valid UTF-8.
pub fn extract_member_id(headers: &HeaderMap) -> Result<MemberId, ApiError> {
    headers
        .get(USER_INFO_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(MemberId::new)
        .ok_or(ApiError::MissingUserInfo)
}
