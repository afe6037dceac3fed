//! Human-readable tournament report

use crate::error::RejectionKind;
use crate::ingest::{Rejection, Tournament};
use crate::winners::{announcement, Podium, Standing};

/// Printed instead of winner lines when nobody completed three races
pub const NO_WINNERS: &str = "No participant completed three races.";

/// Text report formatter
#[derive(Debug, Default)]
pub struct TextOutput {
    show_results: bool,
    show_rejections: bool,
}

impl TextOutput {
    pub fn new(show_results: bool, show_rejections: bool) -> Self {
        Self {
            show_results,
            show_rejections,
        }
    }

    fn rejection_line(rejection: &Rejection) -> String {
        match rejection.error.kind() {
            RejectionKind::IdentityConflict => format!("Error: {}", rejection.error),
            _ => rejection.error.to_string(),
        }
    }

    fn standing_line(standing: &Standing<'_>) -> String {
        format!(
            "{} (ID: {}) who had the average time of {:.1} seconds",
            standing.participant.name(),
            standing.participant.id(),
            standing.average_seconds
        )
    }

    /// Render the full report
    pub fn render(&self, tournament: &Tournament, podium: &Podium<'_>) -> String {
        let mut out = String::new();

        if self.show_rejections {
            for rejection in tournament.rejections() {
                out.push_str(&Self::rejection_line(rejection));
                out.push('\n');
            }
        }

        out.push_str("\nAll valid participants (with at least one race):\n");
        for participant in tournament.registry().participants() {
            out.push_str(&format!("{} (ID: {})\n", participant.name(), participant.id()));
            if self.show_results {
                for result in participant.results() {
                    out.push_str(&format!("  {result}\n"));
                }
            }
        }

        out.push_str("\nParticipants with three valid races:\n");
        for standing in &podium.qualifiers {
            out.push_str(&Self::standing_line(standing));
            out.push('\n');
        }

        out.push('\n');
        out.push_str(announcement(podium.winners.len()));
        out.push('\n');
        if podium.winners.is_empty() {
            out.push_str(NO_WINNERS);
            out.push('\n');
        }
        for winner in &podium.winners {
            out.push_str(&Self::standing_line(winner));
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
Ann,1,09:00:00,09:02:00,1000m
Ann,1,09:00:00,09:02:00,eggRace
Ann,1,09:00:00,09:02:00,sackRace
Bo,2,09:00:00,09:02:00,1000m
Bo,2,09:00:00,09:02:00,eggRace
Bo,2,09:00:00,09:02:00,sackRace
Bob,2,09:00:00,09:01:00,1000m
Cy,3,09:00:00,09:01:00,1000m
Cy,3,09:00:00,09:00:00,badRace
";

    #[test]
    fn test_full_report_layout() {
        let tournament = Tournament::from_lines(INPUT.lines());
        let report = TextOutput::new(false, true).render(&tournament, &tournament.podium());

        let expected = "\
Error: Participant with ID 2 already exists with a different name: Bo vs Bob
Invalid race type for Cy: badRace

All valid participants (with at least one race):
Ann (ID: 1)
Bo (ID: 2)
Cy (ID: 3)

Participants with three valid races:
Ann (ID: 1) who had the average time of 120.0 seconds
Bo (ID: 2) who had the average time of 120.0 seconds

And the winners are:
Ann (ID: 1) who had the average time of 120.0 seconds
Bo (ID: 2) who had the average time of 120.0 seconds
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_quiet_and_show_results() {
        let tournament = Tournament::from_lines(["Cy,3,09:00:00,09:01:00,1000m", "bad"]);
        let report = TextOutput::new(true, false).render(&tournament, &tournament.podium());

        assert!(!report.contains("Invalid data format"));
        assert!(report.contains("Cy (ID: 3)\n  1000m, 09:00:00, 09:01:00\n"));
    }

    #[test]
    fn test_single_winner_and_no_winner() {
        let single = Tournament::from_lines(INPUT.lines().take(3));
        let report = TextOutput::default().render(&single, &single.podium());
        assert!(report.contains("And the winner is:\nAnn (ID: 1)"));

        let none = Tournament::from_lines(["Cy,3,09:00:00,09:01:00,1000m"]);
        let report = TextOutput::default().render(&none, &none.podium());
        assert!(report.ends_with(&format!("And the winners are:\n{NO_WINNERS}\n")));
    }
}
