//! API schema types for request/response definitions.
//!
//! Types use serde derives for JSON serialization. Payload field names are
//! camelCase to match what existing clients of the program service read.

pub mod common;
pub mod favorites;
