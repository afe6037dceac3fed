//! JSON output format for tournament reports

use crate::aggregate::average_seconds;
use crate::error::RejectionKind;
use crate::ingest::Tournament;
use crate::race::RaceType;
use crate::registry::Participant;
use crate::time::format_clock_time;
use crate::winners::{Podium, Standing};
use serde::Serialize;

/// A single race result
#[derive(Debug, Clone, Serialize)]
pub struct JsonRace {
    pub race_type: RaceType,
    /// `HH:MM:SS`
    pub start: String,
    /// `HH:MM:SS`
    pub end: String,
    pub elapsed_seconds: f64,
}

/// A participant with at least one valid race
#[derive(Debug, Clone, Serialize)]
pub struct JsonParticipant {
    pub name: String,
    pub id: i32,
    pub races: Vec<JsonRace>,
    /// Rounded to one decimal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_seconds: Option<f64>,
}

/// A qualifier or winner
#[derive(Debug, Clone, Serialize)]
pub struct JsonStanding {
    pub name: String,
    pub id: i32,
    pub average_seconds: f64,
}

/// A skipped input line
#[derive(Debug, Clone, Serialize)]
pub struct JsonRejection {
    pub line: usize,
    pub kind: RejectionKind,
    pub message: String,
}

/// Counts over the whole input
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    pub lines: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub participants: Vec<JsonParticipant>,
    pub qualifiers: Vec<JsonStanding>,
    pub winners: Vec<JsonStanding>,
    pub rejections: Vec<JsonRejection>,
    pub summary: JsonSummary,
}

impl From<&Participant> for JsonParticipant {
    fn from(participant: &Participant) -> Self {
        Self {
            name: participant.name().to_string(),
            id: participant.id(),
            races: participant
                .results()
                .iter()
                .map(|r| JsonRace {
                    race_type: r.race_type(),
                    start: format_clock_time(r.start()),
                    end: format_clock_time(r.end()),
                    elapsed_seconds: r.elapsed_seconds(),
                })
                .collect(),
            average_seconds: average_seconds(participant),
        }
    }
}

impl From<&Standing<'_>> for JsonStanding {
    fn from(standing: &Standing<'_>) -> Self {
        Self {
            name: standing.participant.name().to_string(),
            id: standing.participant.id(),
            average_seconds: standing.average_seconds,
        }
    }
}

impl JsonOutput {
    pub fn new(tournament: &Tournament, podium: &Podium<'_>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "winners-json-v1".to_string(),
            participants: tournament
                .registry()
                .participants()
                .iter()
                .map(JsonParticipant::from)
                .collect(),
            qualifiers: podium.qualifiers.iter().map(JsonStanding::from).collect(),
            winners: podium.winners.iter().map(JsonStanding::from).collect(),
            rejections: tournament
                .rejections()
                .iter()
                .map(|r| JsonRejection {
                    line: r.line_number,
                    kind: r.error.kind(),
                    message: r.error.to_string(),
                })
                .collect(),
            summary: JsonSummary {
                lines: tournament.line_count(),
                accepted: tournament.accepted_count(),
                rejected: tournament.rejections().len(),
            },
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_document_shape() {
        let tournament = Tournament::from_lines([
            "Ann,1,09:00:00,09:02:00,1000m",
            "Ann,1,09:00:00,09:02:01,eggRace",
            "Ann,1,09:00:00,09:02:02,sackRace",
            "Ann,x,09:00:00,09:02:02,sackRace",
        ]);
        let json = JsonOutput::new(&tournament, &tournament.podium())
            .to_json()
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["format"], "winners-json-v1");
        assert_eq!(parsed["participants"][0]["races"][1]["race_type"], "eggRace");
        assert_eq!(parsed["participants"][0]["races"][2]["end"], "09:02:02");
        assert_eq!(parsed["winners"][0]["name"], "Ann");
        assert_eq!(parsed["winners"][0]["average_seconds"], 121.0);
        assert_eq!(parsed["rejections"][0]["line"], 4);
        assert_eq!(parsed["rejections"][0]["kind"], "invalid_id");
        assert_eq!(parsed["summary"]["accepted"], 3);
        assert_eq!(parsed["summary"]["rejected"], 1);
    }

    #[test]
    fn test_json_empty_winners() {
        let tournament = Tournament::from_lines(["Ann,1,09:00:00,09:02:00,1000m"]);
        let output = JsonOutput::new(&tournament, &tournament.podium());
        assert!(output.winners.is_empty());
        assert_eq!(output.participants[0].average_seconds, Some(120.0));
    }
}
