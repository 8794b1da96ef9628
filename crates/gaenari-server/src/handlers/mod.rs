//! HTTP handler modules.
//!
//! Handlers parse requests, acquire the service lock, delegate to
//! [`FavoriteService`](crate::service::FavoriteService), and wrap the result
//! in the response envelope. No business logic lives in handlers.

pub mod favorites;
pub mod health;
