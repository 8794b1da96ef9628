//! Domain model for the gaenari program service.
//!
//! Programs are stored exercise plans (distance, time or interval based) that
//! a member can mark as favorites. The mission types mirror the contract the
//! challenge service exchanges with this one.

pub mod error;
pub mod id;
pub mod mission;
pub mod program;

// Re-export commonly used types
pub use error::CoreError;
pub use id::{MemberId, ProgramId, RangeId};
pub use mission::{ChallengeType, MissionDto};
pub use program::{IntervalRange, NewIntervalRange, NewProgram, Program, ProgramType};
