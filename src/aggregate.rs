//! Average race times
//!
//! Averages are rounded to one decimal, halves away from zero, and that
//! rounded value is what winners are compared on.

use crate::registry::Participant;

/// Round to one decimal place, halves away from zero
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounded mean of a set of durations, `None` when empty
pub fn mean_seconds<I>(durations: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (total, count) = durations
        .into_iter()
        .fold((0.0, 0usize), |(total, count), secs| (total + secs, count + 1));

    if count == 0 {
        return None;
    }
    Some(round_tenths(total / count as f64))
}

/// Rounded average race time of a participant, `None` if they never raced
pub fn average_seconds(participant: &Participant) -> Option<f64> {
    mean_seconds(participant.results().iter().map(|r| r.elapsed_seconds()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate_line;

    #[test]
    fn test_round_tenths_half_away_from_zero() {
        assert_eq!(round_tenths(122.25), 122.3);
        assert_eq!(round_tenths(-122.25), -122.3);
        assert_eq!(round_tenths(122.24), 122.2);
        assert_eq!(round_tenths(0.05), 0.1);
    }

    #[test]
    fn test_mean_of_fractional_durations() {
        assert_eq!(mean_seconds([120.0, 125.4, 121.6]), Some(122.3));
    }

    #[test]
    fn test_mean_of_empty_is_none() {
        assert_eq!(mean_seconds(std::iter::empty()), None);
    }

    #[test]
    fn test_average_seconds_of_participant() {
        let mut participant = Participant::new("Ann", 7);
        for line in [
            "Ann,7,09:00:00,09:02:00,1000m",
            "Ann,7,10:00:00,10:02:05,eggRace",
            "Ann,7,11:00:00,11:02:02,sackRace",
        ] {
            participant.add_result(validate_line(line).unwrap().result);
        }
        // (120 + 125 + 122) / 3 = 122.333...
        assert_eq!(average_seconds(&participant), Some(122.3));
    }

    #[test]
    fn test_average_seconds_without_results() {
        assert_eq!(average_seconds(&Participant::new("Ann", 7)), None);
    }
}
