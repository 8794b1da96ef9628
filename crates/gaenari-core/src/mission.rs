//! Mission contract shared with the challenge service.
//!
//! The challenge service sends these when a member finishes a run so rewards
//! can be attributed. Field names follow the camelCase JSON the challenge
//! service emits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// What a mission's target value measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeType {
    #[serde(rename = "D")]
    Distance,
    #[serde(rename = "T")]
    Time,
}

impl FromStr for ChallengeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" => Ok(ChallengeType::Distance),
            "T" => Ok(ChallengeType::Time),
            other => Err(CoreError::UnknownChallengeType {
                code: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChallengeType::Distance => f.write_str("D"),
            ChallengeType::Time => f.write_str("T"),
        }
    }
}

/// A mission and the rewards for completing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub challenge_type: ChallengeType,
    /// Target value (meters or seconds, depending on the type).
    pub value: i32,
    pub coin: i32,
    pub heart: i32,
}
