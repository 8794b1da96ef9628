//! FavoriteService: the coordinator between HTTP handlers and the program
//! store.
//!
//! Handlers are thin wrappers over these methods. The service owns the store
//! and builds the favorite list projection.

use tracing::{debug, info};

use gaenari_core::{MemberId, NewProgram, Program, ProgramId, ProgramType};
use gaenari_storage::{InMemoryStore, ProgramStore, SqliteStore};

use crate::config::IN_MEMORY_DB;
use crate::error::ApiError;
use crate::schema::favorites::{
    FavoriteListDto, IntervalInfo, IntervalRangeView, ProgramDto, ProgramInfo,
};

/// Favorite program operations over a [`ProgramStore`] backend.
pub struct FavoriteService {
    store: Box<dyn ProgramStore + Send>,
}

impl FavoriteService {
    /// Wraps an existing store.
    pub fn new<S>(store: S) -> Self
    where
        S: ProgramStore + Send + 'static,
    {
        FavoriteService {
            store: Box::new(store),
        }
    }

    /// Opens the SQLite database at `db_path`, or an in-memory store when the
    /// path is `:memory:`.
    pub fn open(db_path: &str) -> Result<Self, ApiError> {
        if db_path == IN_MEMORY_DB {
            return Ok(Self::in_memory());
        }
        let store = SqliteStore::new(db_path)
            .map_err(|e| ApiError::InternalError(format!("failed to open store: {}", e)))?;
        Ok(Self::new(store))
    }

    /// Creates a service over an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }

    /// Stores a new program. Used for seeding; programs are otherwise
    /// authored by other parts of the platform.
    pub fn create_program(&mut self, program: &NewProgram) -> Result<Program, ApiError> {
        let stored = self.store.insert_program(program)?;
        info!(program_id = %stored.id, member_id = %stored.member_id, "program created");
        Ok(stored)
    }

    /// Looks up a program by id.
    pub fn find_program(&self, id: ProgramId) -> Result<Option<Program>, ApiError> {
        Ok(self.store.find_by_id(id)?)
    }

    /// Overwrites a stored program.
    pub fn save_program(&mut self, program: &Program) -> Result<(), ApiError> {
        self.store.save(program)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Favorites
    // -----------------------------------------------------------------------

    /// Lists the member's favorite programs.
    ///
    /// Returns an empty list when there are none, otherwise a single
    /// [`FavoriteListDto`] holding every program. Any program with an unknown
    /// type code fails the whole call.
    pub fn get_favorite_list(
        &self,
        member_id: &MemberId,
    ) -> Result<Vec<FavoriteListDto>, ApiError> {
        let programs = self.store.list_favorites_by_member(member_id)?;
        debug!(member_id = %member_id, count = programs.len(), "loaded favorite programs");

        let programs = programs
            .iter()
            .map(to_program_dto)
            .collect::<Result<Vec<_>, _>>()?;

        if programs.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![FavoriteListDto { programs }])
    }

    /// Marks one of the member's programs as favorite.
    ///
    /// A program owned by another member is reported as missing.
    pub fn register_favorite(
        &mut self,
        member_id: &MemberId,
        program_id: ProgramId,
    ) -> Result<bool, ApiError> {
        let mut program = self
            .find_owned(member_id, program_id)?
            .ok_or(ApiError::FavoriteCreateFailed(program_id))?;

        program.update_is_favorite(true);
        self.store.save(&program)?;

        info!(member_id = %member_id, program_id = %program_id, "favorite registered");
        Ok(true)
    }

    /// Clears the favorite mark on one of the member's programs.
    pub fn clear_favorite(
        &mut self,
        member_id: &MemberId,
        program_id: ProgramId,
    ) -> Result<bool, ApiError> {
        let mut program = self
            .find_owned(member_id, program_id)?
            .ok_or(ApiError::FavoriteDeleteFailed(program_id))?;

        program.update_is_favorite(false);
        self.store.save(&program)?;

        info!(member_id = %member_id, program_id = %program_id, "favorite cleared");
        Ok(true)
    }

    fn find_owned(
        &self,
        member_id: &MemberId,
        program_id: ProgramId,
    ) -> Result<Option<Program>, ApiError> {
        let program = self.store.find_by_id(program_id)?;
        Ok(program.filter(|p| &p.member_id == member_id))
    }
}

fn to_program_dto(program: &Program) -> Result<ProgramDto, ApiError> {
    let program_type = program.program_type()?;
    Ok(ProgramDto {
        id: program.id,
        title: program.title.clone(),
        usage_count: program.usage_count,
        program_type,
        program: to_program_info(program, program_type),
    })
}

fn to_program_info(program: &Program, program_type: ProgramType) -> ProgramInfo {
    match program_type {
        ProgramType::Distance => ProgramInfo::Distance {
            target_value: program.target_value,
        },
        ProgramType::Time => ProgramInfo::Time {
            target_value: program.target_value,
        },
        ProgramType::Interval => {
            let ranges: Vec<IntervalRangeView> =
                program.ranges.iter().map(IntervalRangeView::from).collect();
            ProgramInfo::Interval(IntervalInfo {
                duration: program.total_duration(),
                set_count: program.set_count,
                range_count: ranges.len(),
                ranges,
            })
        }
    }
}
