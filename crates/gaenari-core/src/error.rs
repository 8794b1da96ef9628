//! Core error types for gaenari-core.

use thiserror::Error;

use crate::program::ProgramType;

/// Errors produced by the domain model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stored program type code is not one of `D`, `T` or `I`.
    #[error("unexpected program type: '{code}'")]
    UnknownProgramType { code: String },

    /// A challenge type code is not one of `D` or `T`.
    #[error("unexpected challenge type: '{code}'")]
    UnknownChallengeType { code: String },

    /// Interval programs need ranges, distance and time programs must not
    /// carry any.
    #[error("{program_type} program cannot have {range_count} interval range(s)")]
    RangeMismatch {
        program_type: ProgramType,
        range_count: usize,
    },

    /// Set count must be at least one.
    #[error("invalid set count: {0}")]
    InvalidSetCount(i32),
}
