use rust_decimal::Decimal;

/// Attendance-based reliability rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReliabilityRating {
    pub score: Decimal,
    pub risk: &'static str,
}

pub fn risk_band(score: Decimal) -> &'static str {
    if score < Decimal::from(70) {
        "High Risk"
    } else if score < Decimal::from(85) {
        "Medium Risk"
    } else {
        "Low Risk"
    }
}

/// Played matches as a share of everything scheduled (played + no-shows),
/// rounded to 2 decimals. A player with no scheduled matches starts at 100.
pub fn reliability(matches_played: i32, no_shows: i32) -> ReliabilityRating {
    let scheduled = matches_played + no_shows;
    if scheduled == 0 {
        return ReliabilityRating {
            score: Decimal::from(100),
            risk: "Low Risk",
        };
    }

    let score = (Decimal::from(matches_played) / Decimal::from(scheduled) * Decimal::from(100))
        .round_dp(2);

    ReliabilityRating {
        score,
        risk: risk_band(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scheduled_matches_is_low_risk() {
        let r = reliability(0, 0);
        assert_eq!(r.score, Decimal::from(100));
        assert_eq!(r.risk, "Low Risk");
    }

    #[test]
    fn half_no_shows_lands_in_high_risk() {
        // 50 < 70, so the band is High Risk, not Medium.
        let r = reliability(5, 5);
        assert_eq!(r.score, Decimal::from(50));
        assert_eq!(r.risk, "High Risk");
    }

    #[test]
    fn band_boundaries_are_inclusive_upwards() {
        assert_eq!(reliability(17, 3).risk, "Low Risk"); // exactly 85
        assert_eq!(reliability(7, 3).risk, "Medium Risk"); // exactly 70
        assert_eq!(reliability(69, 31).risk, "High Risk"); // 69
    }

    #[test]
    fn all_no_shows_scores_zero() {
        let r = reliability(0, 4);
        assert_eq!(r.score, Decimal::ZERO);
        assert_eq!(r.risk, "High Risk");
    }

    #[test]
    fn score_rounds_to_two_decimals() {
        // 2/3 = 66.666... -> 66.67
        assert_eq!(reliability(2, 1).score, Decimal::new(6667, 2));
    }
}
