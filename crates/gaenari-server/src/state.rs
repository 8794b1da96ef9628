//! Application state with a shared `FavoriteService`.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) so handlers await
//! the lock without blocking the tokio runtime. `SqliteStore` holds a
//! `rusqlite::Connection`, which is `!Sync`, so an `RwLock` is not an option.

use std::sync::Arc;

use crate::error::ApiError;
use crate::service::FavoriteService;

/// Shared application state for the HTTP server.
///
/// Every handler takes the service lock for the whole operation, so a
/// favorite toggle's read-modify-write never interleaves with another.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<tokio::sync::Mutex<FavoriteService>>,
}

impl AppState {
    /// Creates a new `AppState` backed by the database at `db_path`
    /// (`:memory:` for the in-memory store).
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        Ok(Self::from_service(FavoriteService::open(db_path)?))
    }

    /// Creates a new `AppState` with an empty in-memory store (for testing).
    pub fn in_memory() -> Self {
        Self::from_service(FavoriteService::in_memory())
    }

    pub fn from_service(service: FavoriteService) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        }
    }
}
