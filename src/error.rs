//! Per-record rejection reasons
//!
//! None of these abort a run: the offending line is skipped and reported.

use serde::Serialize;
use thiserror::Error;

/// Placeholder reported when the race type field is blank
pub const MISSING_RACE_TYPE: &str = "No race type added";

/// Why a single input line contributed nothing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Invalid data format: {}", .fields.join(","))]
    MalformedLine { fields: Vec<String> },

    #[error("Invalid name for {name}: Participants name should only contain letters, hyphens and spaces.")]
    InvalidName { name: String },

    #[error("Invalid id format for {name}: {raw}")]
    InvalidId { name: String, raw: String },

    #[error("Invalid time format for {name}: {start} or {end}")]
    InvalidTimeFormat {
        name: String,
        start: String,
        end: String,
    },

    #[error("Invalid time format for {name}: startTime {start} occurs later than endTime {end}")]
    InvertedTimes {
        name: String,
        start: String,
        end: String,
    },

    #[error("Invalid race type for {name}: {}", display_race_type(.race_type))]
    InvalidRaceType { name: String, race_type: String },

    #[error("Participant with ID {id} already exists with a different name: {existing} vs {incoming}")]
    IdentityConflict {
        id: i32,
        existing: String,
        incoming: String,
    },
}

fn display_race_type(race_type: &str) -> &str {
    if race_type.trim().is_empty() {
        MISSING_RACE_TYPE
    } else {
        race_type
    }
}

/// Coarse category of a [`RecordError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    MalformedLine,
    InvalidName,
    InvalidId,
    InvalidTimeFormat,
    InvalidRaceType,
    IdentityConflict,
}

impl RecordError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            RecordError::MalformedLine { .. } => RejectionKind::MalformedLine,
            RecordError::InvalidName { .. } => RejectionKind::InvalidName,
            RecordError::InvalidId { .. } => RejectionKind::InvalidId,
            RecordError::InvalidTimeFormat { .. } | RecordError::InvertedTimes { .. } => {
                RejectionKind::InvalidTimeFormat
            }
            RecordError::InvalidRaceType { .. } => RejectionKind::InvalidRaceType,
            RecordError::IdentityConflict { .. } => RejectionKind::IdentityConflict,
        }
    }
}
