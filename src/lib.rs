//! Winners - race result tallying for a three-event tournament
//!
//! This library validates `name,id,startTime,endTime,raceType` timing
//! records, groups them per participant, and picks the participant(s) with
//! the lowest average time among those who completed all three races.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod ingest;
pub mod json_output;
pub mod race;
pub mod registry;
pub mod report;
pub mod text_output;
pub mod time;
pub mod validator;
pub mod winners;
