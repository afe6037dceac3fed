//! Record validation for `name,id,startTime,endTime,raceType` lines
//!
//! Rules run in a fixed order and the first failure decides the reported
//! reason:
//! 1. exactly five comma separated fields
//! 2. name made of letters, whitespace and hyphens only
//! 3. integer id
//! 4. both timestamps in `HH:MM:SS`
//! 5. start not later than end
//! 6. race type from the fixed set

use crate::error::RecordError;
use crate::race::{RaceResult, RaceType};
use crate::time::parse_clock_time;
use unicode_general_category::{get_general_category, GeneralCategory};

/// A line that passed every rule, ready for the participant registry
#[derive(Debug, Clone, PartialEq)]
pub struct RaceRecord {
    pub name: String,
    pub id: i32,
    pub result: RaceResult,
}

/// Validate one raw input line
pub fn validate_line(line: &str) -> Result<RaceRecord, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    let [name, id, start, end, race_type] = fields[..] else {
        return Err(RecordError::MalformedLine {
            fields: fields.iter().map(|f| f.to_string()).collect(),
        });
    };

    let name = name.trim();
    if !is_valid_name(name) {
        return Err(RecordError::InvalidName { name: name.into() });
    }

    let Ok(id_value) = id.trim().parse::<i32>() else {
        return Err(RecordError::InvalidId {
            name: name.into(),
            raw: id.into(),
        });
    };

    let (Some(start_time), Some(end_time)) =
        (parse_clock_time(start.trim()), parse_clock_time(end.trim()))
    else {
        return Err(RecordError::InvalidTimeFormat {
            name: name.into(),
            start: start.into(),
            end: end.into(),
        });
    };

    if start_time > end_time {
        return Err(RecordError::InvertedTimes {
            name: name.into(),
            start: start.into(),
            end: end.into(),
        });
    }

    let race_type = race_type.trim();
    let Ok(parsed_type) = race_type.parse::<RaceType>() else {
        return Err(RecordError::InvalidRaceType {
            name: name.into(),
            race_type: race_type.into(),
        });
    };

    Ok(RaceRecord {
        name: name.into(),
        id: id_value,
        result: RaceResult::new(parsed_type, start_time, end_time),
    })
}

/// Names are non-blank and use only letters, whitespace and `-`
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name
            .chars()
            .all(|c| is_letter(c) || c.is_whitespace() || c == '-')
}

/// General category L* only; letter numbers and combining marks are out
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
