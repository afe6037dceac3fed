//! Participant registry
//!
//! Participants are keyed by id. The first valid record for an id fixes the
//! participant's name; later records must repeat that name (ignoring case)
//! or they are rejected as identity conflicts.

use crate::error::RecordError;
use crate::race::RaceResult;
use crate::validator::RaceRecord;
use std::collections::HashMap;

/// One tournament entrant and their race results in input order
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    name: String,
    id: i32,
    results: Vec<RaceResult>,
}

impl Participant {
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        Self {
            name: name.into(),
            id,
            results: Vec::new(),
        }
    }

    /// Name from the first record seen for this id
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn results(&self) -> &[RaceResult] {
        &self.results
    }

    pub fn race_count(&self) -> usize {
        self.results.len()
    }

    pub fn add_result(&mut self, result: RaceResult) {
        self.results.push(result);
    }
}

/// Simple uppercase mapping; characters whose uppercase form is longer
/// than one char (`ß` -> `SS`) are left as they are
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Ordinal case-insensitive comparison, one char at a time
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars().map(fold_case).eq(b.chars().map(fold_case))
}

/// In-memory participant collection, ordered by first appearance
#[derive(Debug, Default)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
    by_id: HashMap<i32, usize>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a validated record to its participant, creating one if needed
    ///
    /// Fails without touching the registry when the id is already bound to
    /// a different name.
    pub fn register(&mut self, record: RaceRecord) -> Result<&Participant, RecordError> {
        let RaceRecord { name, id, result } = record;

        let index = match self.by_id.get(&id) {
            Some(&index) => {
                let existing = &self.participants[index];
                if !names_match(existing.name(), &name) {
                    return Err(RecordError::IdentityConflict {
                        id,
                        existing: existing.name().to_string(),
                        incoming: name,
                    });
                }
                index
            }
            None => {
                self.participants.push(Participant::new(name, id));
                let index = self.participants.len() - 1;
                self.by_id.insert(id, index);
                index
            }
        };

        let participant = &mut self.participants[index];
        participant.add_result(result);
        Ok(participant)
    }

    pub fn get(&self, id: i32) -> Option<&Participant> {
        self.by_id.get(&id).map(|&index| &self.participants[index])
    }

    /// All participants in insertion order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
