//! Storage error types for gaenari-storage.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A program with the given ID was not found.
    #[error("program not found: {0}")]
    ProgramNotFound(i64),

    /// The program data violates a domain rule.
    #[error("invalid program: {0}")]
    InvalidProgram(#[from] gaenari_core::CoreError),
}
