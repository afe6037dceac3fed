//! CSV output format for tournament reports
//!
//! One row per participant, for spreadsheet analysis.

use crate::aggregate::average_seconds;
use crate::ingest::Tournament;
use crate::winners::Podium;

/// CSV record for a single participant
#[derive(Debug, Clone)]
pub struct CsvParticipant {
    pub name: String,
    pub id: i32,
    pub races: usize,
    pub average_seconds: Option<f64>,
    pub winner: bool,
}

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    rows: Vec<CsvParticipant>,
}

impl CsvOutput {
    pub fn new(tournament: &Tournament, podium: &Podium<'_>) -> Self {
        let rows = tournament
            .registry()
            .participants()
            .iter()
            .map(|participant| CsvParticipant {
                name: participant.name().to_string(),
                id: participant.id(),
                races: participant.race_count(),
                average_seconds: average_seconds(participant),
                winner: podium
                    .winners
                    .iter()
                    .any(|w| w.participant.id() == participant.id()),
            })
            .collect();
        Self { rows }
    }

    fn header() -> &'static str {
        "name,id,races,average_seconds,winner"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_row(row: &CsvParticipant) -> String {
        let average = row
            .average_seconds
            .map(|avg| format!("{avg:.1}"))
            .unwrap_or_default();
        [
            Self::escape_field(&row.name),
            row.id.to_string(),
            row.races.to_string(),
            average,
            row.winner.to_string(),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }

        output
    }
}
