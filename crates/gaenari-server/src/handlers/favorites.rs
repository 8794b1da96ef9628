//! Favorite program handlers (list, register, clear).

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;

use gaenari_core::ProgramId;

use crate::error::ApiError;
use crate::extract::extract_member_id;
use crate::schema::common::{ApiResponse, ResponseCode};
use crate::schema::favorites::FavoriteListDto;
use crate::state::AppState;

/// Lists the caller's favorite programs.
///
/// `GET /program/favorite`
pub async fn get_favorite_list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiResponse<Vec<FavoriteListDto>>, ApiError> {
    let member_id = extract_member_id(&headers)?;
    let service = state.service.lock().await;
    let favorites = service.get_favorite_list(&member_id)?;
    Ok(ApiResponse::success(
        ResponseCode::FavoriteProgramListFetched,
        favorites,
    ))
}

/// Marks a program as favorite.
///
/// `PUT /program/favorite/{program_id}`
pub async fn register_favorite(
    State(state): State<AppState>,
    program_id: Result<Path<i64>, PathRejection>,
    headers: HeaderMap,
) -> Result<ApiResponse<bool>, ApiError> {
    let Path(program_id) = program_id?;
    let member_id = extract_member_id(&headers)?;
    tracing::debug!(member_id = %member_id, program_id = program_id, "register favorite");

    let mut service = state.service.lock().await;
    let is_success = service.register_favorite(&member_id, ProgramId(program_id))?;
    Ok(ApiResponse::success(
        ResponseCode::FavoriteProgramUpdated,
        is_success,
    ))
}

/// Clears a program's favorite mark.
///
/// `DELETE /program/favorite/{program_id}`
pub async fn clear_favorite(
    State(state): State<AppState>,
    program_id: Result<Path<i64>, PathRejection>,
    headers: HeaderMap,
) -> Result<ApiResponse<bool>, ApiError> {
    let Path(program_id) = program_id?;
    let member_id = extract_member_id(&headers)?;
    tracing::debug!(member_id = %member_id, program_id = program_id, "clear favorite");

    let mut service = state.service.lock().await;
    let is_success = service.clear_favorite(&member_id, ProgramId(program_id))?;
    Ok(ApiResponse::success(
        ResponseCode::FavoriteProgramDeleted,
        is_success,
    ))
}
