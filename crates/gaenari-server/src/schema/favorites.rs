//! Favorite list response types.
//!
//! A favorite list response is a `Vec<FavoriteListDto>` that is either empty
//! or holds exactly one [`FavoriteListDto`] carrying every favorite program.
//! Existing clients read the list that way, so the wrapping is kept.

use serde::Serialize;

use gaenari_core::{IntervalRange, ProgramId, ProgramType, RangeId};

/// All favorite programs of a member.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteListDto {
    pub programs: Vec<ProgramDto>,
}

/// One favorite program with its type-specific details.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDto {
    pub id: ProgramId,
    pub title: String,
    pub usage_count: i32,
    #[serde(rename = "type")]
    pub program_type: ProgramType,
    pub program: ProgramInfo,
}

/// Type-specific program details.
///
/// Serialized without a tag; the sibling `type` field of [`ProgramDto`] says
/// which shape to expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProgramInfo {
    Distance {
        #[serde(rename = "targetValue")]
        target_value: f64,
    },
    Time {
        #[serde(rename = "targetValue")]
        target_value: f64,
    },
    Interval(IntervalInfo),
}

/// Interval program details.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalInfo {
    /// Total seconds: one set's range durations summed, times `set_count`.
    pub duration: i64,
    pub set_count: i32,
    pub range_count: usize,
    pub ranges: Vec<IntervalRangeView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalRangeView {
    pub id: RangeId,
    pub is_running: bool,
    pub time: i32,
    pub speed: f64,
}

impl From<&IntervalRange> for IntervalRangeView {
    fn from(range: &IntervalRange) -> Self {
        IntervalRangeView {
            id: range.id,
            is_running: range.is_running,
            time: range.time,
            speed: range.speed,
        }
    }
}
