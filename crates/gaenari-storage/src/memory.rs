//! In-memory implementation of [`ProgramStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and for running the
//! server without a database file. Semantics match the SQLite backend.

use std::collections::BTreeMap;

use gaenari_core::{IntervalRange, MemberId, NewProgram, Program, ProgramId, RangeId};

use crate::error::StorageError;
use crate::traits::ProgramStore;

/// Programs kept in a `BTreeMap` so listing comes out in id order.
#[derive(Debug)]
pub struct InMemoryStore {
    programs: BTreeMap<ProgramId, Program>,
    next_program_id: i64,
    next_range_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            programs: BTreeMap::new(),
            next_program_id: 1,
            next_range_id: 1,
        }
    }

    /// Number of stored programs.
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        InMemoryStore::new()
    }
}

impl ProgramStore for InMemoryStore {
    fn insert_program(&mut self, program: &NewProgram) -> Result<Program, StorageError> {
        program.validate()?;

        let id = ProgramId(self.next_program_id);
        self.next_program_id += 1;

        let ranges = program
            .ranges
            .iter()
            .map(|r| {
                let range_id = RangeId(self.next_range_id);
                self.next_range_id += 1;
                IntervalRange {
                    id: range_id,
                    is_running: r.is_running,
                    time: r.time,
                    speed: r.speed,
                }
            })
            .collect();

        let stored = Program {
            id,
            member_id: program.member_id.clone(),
            title: program.title.clone(),
            usage_count: 0,
            type_code: program.program_type.code().to_string(),
            target_value: program.target_value,
            set_count: program.set_count,
            ranges,
            is_favorite: false,
        };
        self.programs.insert(id, stored.clone());
        Ok(stored)
    }

    fn find_by_id(&self, id: ProgramId) -> Result<Option<Program>, StorageError> {
        Ok(self.programs.get(&id).cloned())
    }

    fn save(&mut self, program: &Program) -> Result<(), StorageError> {
        let slot = self
            .programs
            .get_mut(&program.id)
            .ok_or(StorageError::ProgramNotFound(program.id.0))?;
        // Owner is fixed at insertion, same as the SQLite backend.
        let member_id = slot.member_id.clone();
        *slot = Program {
            member_id,
            ..program.clone()
        };
        Ok(())
    }

    fn list_favorites_by_member(&self, member: &MemberId) -> Result<Vec<Program>, StorageError> {
        Ok(self
            .programs
            .values()
            .filter(|p| p.is_favorite && &p.member_id == member)
            .cloned()
            .collect())
    }
}
