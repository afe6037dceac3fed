//! Race types and individual race results

use crate::time::{elapsed_seconds, format_clock_time};
use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of events a participant can be timed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RaceType {
    #[serde(rename = "1000m")]
    Run1000m,
    #[serde(rename = "eggRace")]
    EggRace,
    #[serde(rename = "sackRace")]
    SackRace,
}

impl RaceType {
    pub const ALL: [RaceType; 3] = [RaceType::Run1000m, RaceType::EggRace, RaceType::SackRace];

    /// Label as it appears in input files
    pub fn as_str(self) -> &'static str {
        match self {
            RaceType::Run1000m => "1000m",
            RaceType::EggRace => "eggRace",
            RaceType::SackRace => "sackRace",
        }
    }
}

impl fmt::Display for RaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for labels outside the race type set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRaceType;

impl FromStr for RaceType {
    type Err = UnknownRaceType;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RaceType::ALL
            .into_iter()
            .find(|race_type| race_type.as_str() == s)
            .ok_or(UnknownRaceType)
    }
}

/// One completed race attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceResult {
    race_type: RaceType,
    start: NaiveTime,
    end: NaiveTime,
}

impl RaceResult {
    /// Callers must ensure `start <= end`; the record validator does.
    pub fn new(race_type: RaceType, start: NaiveTime, end: NaiveTime) -> Self {
        debug_assert!(start <= end, "race ends before it starts");
        Self {
            race_type,
            start,
            end,
        }
    }

    pub fn race_type(&self) -> RaceType {
        self.race_type
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Time taken, never negative
    pub fn elapsed_seconds(&self) -> f64 {
        elapsed_seconds(self.start, self.end)
    }
}

impl fmt::Display for RaceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.race_type,
            format_clock_time(self.start),
            format_clock_time(self.end)
        )
    }
}
