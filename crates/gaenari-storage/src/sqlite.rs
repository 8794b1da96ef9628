//! SQLite implementation of [`ProgramStore`].
//!
//! [`SqliteStore`] persists programs in two tables: `programs` and
//! `interval_ranges`. Ranges keep their order through a `position` column.
//! Every write runs in a transaction.

use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};

use gaenari_core::{IntervalRange, MemberId, NewProgram, Program, ProgramId, RangeId};

use crate::error::StorageError;
use crate::traits::ProgramStore;

const PROGRAM_COLUMNS: &str =
    "id, member_id, title, usage_count, program_type, target_value, set_count, is_favorite";

/// SQLite-backed implementation of [`ProgramStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Maps a `programs` row selected with [`PROGRAM_COLUMNS`]. Ranges are
    /// loaded separately.
    fn program_from_row(row: &Row<'_>) -> rusqlite::Result<Program> {
        Ok(Program {
            id: ProgramId(row.get(0)?),
            member_id: MemberId(row.get(1)?),
            title: row.get(2)?,
            usage_count: row.get(3)?,
            type_code: row.get(4)?,
            target_value: row.get(5)?,
            set_count: row.get(6)?,
            ranges: Vec::new(),
            is_favorite: row.get(7)?,
        })
    }

    fn load_ranges(&self, program_id: ProgramId) -> Result<Vec<IntervalRange>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, is_running, time, speed FROM interval_ranges WHERE program_id = ?1 ORDER BY position",
        )?;
        let rows = stmt.query_map(params![program_id.0], |row| {
            Ok(IntervalRange {
                id: RangeId(row.get(0)?),
                is_running: row.get(1)?,
                time: row.get(2)?,
                speed: row.get(3)?,
            })
        })?;
        let mut ranges = Vec::new();
        for row in rows {
            ranges.push(row?);
        }
        Ok(ranges)
    }

    /// Replaces the stored ranges of a program, keeping the given ids.
    fn write_ranges(
        tx: &Transaction<'_>,
        program_id: ProgramId,
        ranges: &[IntervalRange],
    ) -> Result<(), StorageError> {
        tx.execute(
            "DELETE FROM interval_ranges WHERE program_id = ?1",
            params![program_id.0],
        )?;
        let mut stmt = tx.prepare_cached(
            "INSERT INTO interval_ranges (id, program_id, position, is_running, time, speed) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for (position, range) in ranges.iter().enumerate() {
            stmt.execute(params![
                range.id.0,
                program_id.0,
                position as i64,
                range.is_running,
                range.time,
                range.speed,
            ])?;
        }
        Ok(())
    }
}

impl ProgramStore for SqliteStore {
    fn insert_program(&mut self, program: &NewProgram) -> Result<Program, StorageError> {
        program.validate()?;

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO programs (member_id, title, usage_count, program_type, target_value, set_count, is_favorite) VALUES (?1, ?2, 0, ?3, ?4, ?5, 0)",
            params![
                program.member_id.as_str(),
                program.title,
                program.program_type.code(),
                program.target_value,
                program.set_count,
            ],
        )?;
        let id = ProgramId(tx.last_insert_rowid());

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO interval_ranges (program_id, position, is_running, time, speed) VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (position, range) in program.ranges.iter().enumerate() {
                stmt.execute(params![
                    id.0,
                    position as i64,
                    range.is_running,
                    range.time,
                    range.speed,
                ])?;
            }
        }
        tx.commit()?;

        self.find_by_id(id)?
            .ok_or(StorageError::ProgramNotFound(id.0))
    }

    fn find_by_id(&self, id: ProgramId) -> Result<Option<Program>, StorageError> {
        let sql = format!("SELECT {PROGRAM_COLUMNS} FROM programs WHERE id = ?1");
        let program = self
            .conn
            .query_row(&sql, params![id.0], Self::program_from_row)
            .optional()?;

        match program {
            Some(mut program) => {
                program.ranges = self.load_ranges(program.id)?;
                Ok(Some(program))
            }
            None => Ok(None),
        }
    }

    fn save(&mut self, program: &Program) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;
        let updated = tx.execute(
            "UPDATE programs SET title = ?2, usage_count = ?3, program_type = ?4, target_value = ?5, set_count = ?6, is_favorite = ?7 WHERE id = ?1",
            params![
                program.id.0,
                program.title,
                program.usage_count,
                program.type_code,
                program.target_value,
                program.set_count,
                program.is_favorite,
            ],
        )?;
        if updated == 0 {
            return Err(StorageError::ProgramNotFound(program.id.0));
        }
        Self::write_ranges(&tx, program.id, &program.ranges)?;
        tx.commit()?;
        Ok(())
    }

    fn list_favorites_by_member(&self, member: &MemberId) -> Result<Vec<Program>, StorageError> {
        let sql = format!(
            "SELECT {PROGRAM_COLUMNS} FROM programs WHERE member_id = ?1 AND is_favorite = 1 ORDER BY id"
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map(params![member.as_str()], Self::program_from_row)?;

        let mut programs = Vec::new();
        for row in rows {
            let mut program = row?;
            program.ranges = self.load_ranges(program.id)?;
            programs.push(program);
        }
        Ok(programs)
    }
}
