//! Router assembly for the program service HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        // Favorites
        .route(
            "/program/favorite",
            get(handlers::favorites::get_favorite_list),
        )
        .route(
            "/program/favorite/{program_id}",
            put(handlers::favorites::register_favorite)
                .delete(handlers::favorites::clear_favorite),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
