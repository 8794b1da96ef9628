//! HTTP/JSON API server for member favorite programs.
//!
//! Exposes list/register/clear endpoints for favorites under
//! `/program/favorite`. This crate contains the server framework, the
//! favorites service, API schema types, error handling, configuration and
//! route definitions.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
