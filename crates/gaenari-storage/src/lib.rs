//! Persistence for gaenari programs.
//!
//! Provides the [`ProgramStore`] trait (the program repository contract) plus
//! the [`InMemoryStore`] and [`SqliteStore`] backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: ProgramStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: migration setup for the SQLite backend
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::ProgramStore;
