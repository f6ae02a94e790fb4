use rust_decimal::Decimal;

use crate::models::MatchOutcome;

/// How many recent results feed the consistency score.
pub const FORM_WINDOW: usize = 5;

/// Weighted recent-form rating over the last [`FORM_WINDOW`] results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRating {
    pub score: Decimal,
    pub label: &'static str,
}

/// Positional weight, most recent result first.
fn weight(position: usize) -> Decimal {
    match position {
        0 => Decimal::new(15, 1),
        1 => Decimal::new(12, 1),
        2 => Decimal::ONE,
        3 => Decimal::new(8, 1),
        _ => Decimal::new(5, 1),
    }
}

fn points(outcome: MatchOutcome) -> Decimal {
    match outcome {
        MatchOutcome::Win => Decimal::from(3),
        MatchOutcome::Draw => Decimal::ONE,
        MatchOutcome::Loss => Decimal::ZERO,
    }
}

pub fn label_for(score: Decimal) -> &'static str {
    if score > Decimal::from(70) {
        "On Fire"
    } else if score > Decimal::from(30) {
        "Stable"
    } else {
        "Ice Cold"
    }
}

/// Consistency score over the most-recent-first result list, as a percentage
/// of the maximum weighted points available, rounded to 2 decimals.
pub fn consistency(recent_first: &[MatchOutcome]) -> FormRating {
    if recent_first.is_empty() {
        return FormRating {
            score: Decimal::ZERO,
            label: "No Data",
        };
    }

    let mut earned = Decimal::ZERO;
    let mut available = Decimal::ZERO;

    for (position, outcome) in recent_first.iter().take(FORM_WINDOW).enumerate() {
        let w = weight(position);
        earned += w * points(*outcome);
        available += w * Decimal::from(3);
    }

    let score = (earned / available * Decimal::from(100)).round_dp(2);

    FormRating {
        score,
        label: label_for(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MatchOutcome::{Draw, Loss, Win};

    #[test]
    fn five_wins_is_a_perfect_score() {
        let rating = consistency(&[Win; 5]);
        assert_eq!(rating.score, Decimal::new(10000, 2));
        assert_eq!(rating.label, "On Fire");
    }

    #[test]
    fn empty_history_has_no_data() {
        let rating = consistency(&[]);
        assert_eq!(rating.score, Decimal::ZERO);
        assert_eq!(rating.label, "No Data");
    }

    #[test]
    fn short_history_scales_to_available_points() {
        // weights 1.5, 1.2, 1.0; earned 4.5 + 1.2 + 0 = 5.7 of 11.1
        let rating = consistency(&[Win, Draw, Loss]);
        assert_eq!(rating.score, Decimal::new(5135, 2));
        assert_eq!(rating.label, "Stable");
    }

    #[test]
    fn extra_history_beyond_window_is_ignored() {
        let rating = consistency(&[Win, Win, Win, Win, Win, Loss, Loss]);
        assert_eq!(rating.score, Decimal::new(10000, 2));
    }

    #[test]
    fn all_losses_run_ice_cold() {
        let rating = consistency(&[Loss; 5]);
        assert_eq!(rating.score, Decimal::ZERO);
        assert_eq!(rating.label, "Ice Cold");
    }
}
