//! Ingestion pipeline
//!
//! Every line is validated and registered before any averages are taken, so
//! winner selection only ever sees a fully built registry.

use crate::error::RecordError;
use crate::registry::ParticipantRegistry;
use crate::validator::validate_line;
use crate::winners::{self, Podium};
use anyhow::{Context, Result};
use std::path::Path;

/// A skipped input line
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// 1-based line number in the input
    pub line_number: usize,
    pub error: RecordError,
}

/// Everything learned from one pass over the input
#[derive(Debug, Default)]
pub struct Tournament {
    registry: ParticipantRegistry,
    rejections: Vec<Rejection>,
    lines: usize,
    accepted: usize,
}

impl Tournament {
    /// Validate and register every line
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tournament = Self::default();
        for (index, line) in lines.into_iter().enumerate() {
            tournament.ingest_line(index + 1, line);
        }

        tracing::info!(
            lines = tournament.lines,
            accepted = tournament.accepted,
            rejected = tournament.rejections.len(),
            participants = tournament.registry.len(),
            "ingestion complete"
        );
        tournament
    }

    /// Read an input file whole and ingest it
    ///
    /// Invalid UTF-8 becomes U+FFFD, which only fails the affected line.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read race results from {}", path.display()))?;
        let contents = String::from_utf8_lossy(&bytes);
        Ok(Self::from_lines(contents.lines()))
    }

    fn ingest_line(&mut self, line_number: usize, line: &str) {
        self.lines += 1;

        let outcome = validate_line(line).and_then(|record| {
            self.registry
                .register(record)
                .map(|p| (p.name().to_string(), p.id(), p.race_count()))
        });

        match outcome {
            Ok((name, id, races)) => {
                self.accepted += 1;
                tracing::debug!(line_number, %name, id, races, "accepted record");
            }
            Err(error) => {
                if let RecordError::IdentityConflict { .. } = error {
                    tracing::warn!(line_number, %error, "identity conflict");
                } else {
                    tracing::debug!(line_number, %error, "rejected record");
                }
                self.rejections.push(Rejection { line_number, error });
            }
        }
    }

    pub fn registry(&self) -> &ParticipantRegistry {
        &self.registry
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Total lines seen, valid or not
    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted
    }

    /// Qualifiers and winners over the finished registry
    pub fn podium(&self) -> Podium<'_> {
        winners::podium(self.registry.participants())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejectionKind;
    use std::io::Write;

    const SAMPLE: &str = "\
Julia Roberts,42,09:00:00,09:02:00,1000m
julia roberts,42,10:00:00,10:02:05,eggRace
Julia,42,10:30:00,10:31:00,eggRace
JULIA ROBERTS,42,11:00:00,11:02:02,sackRace
O'Brien,7,09:00:00,09:05:00,1000m
Ann,7,09:05:00,09:00:00,1000m
Ann,7,09:00:00,09:05:00,marathon
Ann,7,09:00:00,09:05:00,1000m
";

    #[test]
    fn test_grouping_and_rejections() {
        let tournament = Tournament::from_lines(SAMPLE.lines());

        assert_eq!(tournament.line_count(), 8);
        assert_eq!(tournament.accepted_count(), 4);
        assert_eq!(tournament.registry().len(), 2);

        let julia = tournament.registry().get(42).unwrap();
        assert_eq!(julia.name(), "Julia Roberts");
        assert_eq!(julia.race_count(), 3);

        let kinds: Vec<(usize, RejectionKind)> = tournament
            .rejections()
            .iter()
            .map(|r| (r.line_number, r.error.kind()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (3, RejectionKind::IdentityConflict),
                (5, RejectionKind::InvalidName),
                (6, RejectionKind::InvalidTimeFormat),
                (7, RejectionKind::InvalidRaceType),
            ]
        );
    }

    #[test]
    fn test_podium_after_ingestion() {
        let tournament = Tournament::from_lines(SAMPLE.lines());
        let podium = tournament.podium();
        assert_eq!(podium.qualifiers.len(), 1);
        assert_eq!(podium.winners.len(), 1);
        assert_eq!(podium.winners[0].participant.id(), 42);
        assert_eq!(podium.winners[0].average_seconds, 122.3);
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let tournament = Tournament::from_lines(["Ann,1,09:00:00,09:01:00,1000m", ""]);
        assert_eq!(tournament.rejections().len(), 1);
        assert_eq!(
            tournament.rejections()[0].error.kind(),
            RejectionKind::MalformedLine
        );
    }

    #[test]
    fn test_empty_input() {
        let tournament = Tournament::from_lines(std::iter::empty());
        assert!(tournament.registry().is_empty());
        assert!(tournament.podium().winners.is_empty());
    }

    #[test]
    fn test_from_file_handles_crlf() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Ann,1,09:00:00,09:01:00,1000m\r\nAnn,1,09:00:00,09:01:00,eggRace\r\n"
        )
        .unwrap();

        let tournament = Tournament::from_file(file.path()).unwrap();
        assert!(tournament.rejections().is_empty());
        assert_eq!(tournament.registry().get(1).unwrap().race_count(), 2);
    }

    #[test]
    fn test_from_file_invalid_utf8_skips_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Ann,1,09:00:00,09:01:00,1000m\nM\xfcller,2,09:00:00,09:01:00,1000m\n")
            .unwrap();

        let tournament = Tournament::from_file(file.path()).unwrap();
        assert_eq!(tournament.registry().len(), 1);
        assert_eq!(tournament.rejections().len(), 1);
        assert_eq!(tournament.rejections()[0].line_number, 2);
        assert_eq!(
            tournament.rejections()[0].error.kind(),
            RejectionKind::InvalidName
        );
    }

    #[test]
    fn test_from_file_missing() {
        let err = Tournament::from_file(Path::new("/nonexistent/race-results.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read race results"));
    }
}
