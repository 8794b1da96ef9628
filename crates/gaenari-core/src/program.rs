//! Exercise programs and their interval ranges.
//!
//! A [`Program`] keeps its type as the raw code it was stored with. The code is
//! only parsed into a [`ProgramType`] when something needs to branch on it, so
//! a row written with an unknown code surfaces as
//! [`CoreError::UnknownProgramType`] at that point instead of being silently
//! coerced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::{MemberId, ProgramId, RangeId};

/// What a program's target value measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramType {
    /// Run a target distance.
    #[serde(rename = "D")]
    Distance,
    /// Run for a target time.
    #[serde(rename = "T")]
    Time,
    /// Repeat a sequence of running/resting ranges.
    #[serde(rename = "I")]
    Interval,
}

impl ProgramType {
    /// The single-letter code used on the wire and in storage.
    pub fn code(self) -> &'static str {
        match self {
            ProgramType::Distance => "D",
            ProgramType::Time => "T",
            ProgramType::Interval => "I",
        }
    }
}

impl FromStr for ProgramType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" => Ok(ProgramType::Distance),
            "T" => Ok(ProgramType::Time),
            "I" => Ok(ProgramType::Interval),
            other => Err(CoreError::UnknownProgramType {
                code: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProgramType::Distance => "distance",
            ProgramType::Time => "time",
            ProgramType::Interval => "interval",
        };
        f.write_str(name)
    }
}

/// One running or resting segment of an interval program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalRange {
    pub id: RangeId,
    pub is_running: bool,
    /// Segment length in seconds.
    pub time: i32,
    pub speed: f64,
}

/// A stored exercise program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub member_id: MemberId,
    pub title: String,
    pub usage_count: i32,
    /// Raw type code as persisted (`D`, `T` or `I`).
    pub type_code: String,
    pub target_value: f64,
    pub set_count: i32,
    /// Ordered ranges; empty unless this is an interval program.
    pub ranges: Vec<IntervalRange>,
    pub is_favorite: bool,
}

impl Program {
    /// Parses the stored type code.
    pub fn program_type(&self) -> Result<ProgramType, CoreError> {
        self.type_code.parse()
    }

    pub fn update_is_favorite(&mut self, is_favorite: bool) {
        self.is_favorite = is_favorite;
    }

    /// Length of one pass through all ranges, in seconds.
    pub fn set_duration(&self) -> i64 {
        self.ranges.iter().map(|r| i64::from(r.time)).sum()
    }

    /// Length of the whole interval workout: one set repeated `set_count` times.
    pub fn total_duration(&self) -> i64 {
        self.set_duration() * i64::from(self.set_count)
    }
}

/// Range data for a program that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIntervalRange {
    pub is_running: bool,
    pub time: i32,
    pub speed: f64,
}

/// Program data for insertion. Ids are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProgram {
    pub member_id: MemberId,
    pub title: String,
    pub program_type: ProgramType,
    pub target_value: f64,
    pub set_count: i32,
    pub ranges: Vec<NewIntervalRange>,
}

impl NewProgram {
    /// Checks that ranges are present exactly when the program is an interval
    /// program.
    pub fn validate(&self) -> Result<(), CoreError> {
        let has_ranges = !self.ranges.is_empty();
        let is_interval = self.program_type == ProgramType::Interval;
        if has_ranges != is_interval {
            return Err(CoreError::RangeMismatch {
                program_type: self.program_type,
                range_count: self.ranges.len(),
            });
        }
        if self.set_count < 1 {
            return Err(CoreError::InvalidSetCount(self.set_count));
        }
        Ok(())
    }
}
