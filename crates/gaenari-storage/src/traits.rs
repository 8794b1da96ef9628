//! The [`ProgramStore`] trait defining the program repository contract.
//!
//! All backends implement this trait so the service layer can swap them
//! without changing its logic. The trait is synchronous; callers serialize
//! access (the HTTP server holds the store behind an async mutex).

use gaenari_core::{MemberId, NewProgram, Program, ProgramId};

use crate::error::StorageError;

/// The storage contract for programs.
pub trait ProgramStore {
    /// Validates and stores a new program, assigning program and range ids.
    ///
    /// Returns the stored program.
    fn insert_program(&mut self, program: &NewProgram) -> Result<Program, StorageError>;

    /// Looks up a program with its ranges in order. `Ok(None)` when absent.
    fn find_by_id(&self, id: ProgramId) -> Result<Option<Program>, StorageError>;

    /// Overwrites an existing program, ranges included.
    ///
    /// Fails with [`StorageError::ProgramNotFound`] if the id is unknown.
    fn save(&mut self, program: &Program) -> Result<(), StorageError>;

    /// All programs of `member` with the favorite flag set, ordered by id.
    fn list_favorites_by_member(&self, member: &MemberId) -> Result<Vec<Program>, StorageError>;
}
