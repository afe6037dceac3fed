//! Winner selection
//!
//! Only participants with exactly [`REQUIRED_RACES`] results qualify. The
//! check is a plain count: three results of the same race type qualify, and
//! four results (say, a duplicate submission) do not.

use crate::aggregate::average_seconds;
use crate::registry::Participant;

/// Result count a participant needs to qualify
pub const REQUIRED_RACES: usize = 3;

/// A qualifying participant together with their rounded average
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standing<'a> {
    pub participant: &'a Participant,
    pub average_seconds: f64,
}

/// Qualifiers and the subset tied on the lowest average
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Podium<'a> {
    pub qualifiers: Vec<Standing<'a>>,
    pub winners: Vec<Standing<'a>>,
}

/// Participants with exactly three results, in the order given
pub fn qualifying<'a, I>(participants: I) -> Vec<Standing<'a>>
where
    I: IntoIterator<Item = &'a Participant>,
{
    participants
        .into_iter()
        .filter(|p| p.race_count() == REQUIRED_RACES)
        .filter_map(|participant| {
            average_seconds(participant).map(|average_seconds| Standing {
                participant,
                average_seconds,
            })
        })
        .collect()
}

/// Every standing tied at the minimum rounded average; empty input gives
/// no winners
pub fn select_winners<'a>(standings: &[Standing<'a>]) -> Vec<Standing<'a>> {
    let Some(best) = standings
        .iter()
        .map(|s| s.average_seconds)
        .min_by(f64::total_cmp)
    else {
        return Vec::new();
    };

    standings
        .iter()
        .filter(|s| s.average_seconds == best)
        .copied()
        .collect()
}

/// Qualify and select in one step
pub fn podium<'a, I>(participants: I) -> Podium<'a>
where
    I: IntoIterator<Item = &'a Participant>,
{
    let qualifiers = qualifying(participants);
    let winners = select_winners(&qualifiers);
    tracing::info!(
        qualifiers = qualifiers.len(),
        winners = winners.len(),
        "winner selection complete"
    );
    Podium {
        qualifiers,
        winners,
    }
}

/// Header line introducing the winners
pub fn announcement(winner_count: usize) -> &'static str {
    if winner_count == 1 {
        "And the winner is:"
    } else {
        "And the winners are:"
    }
}
