use crate::models::{MatchOutcome, Player};

/// Outcome of a score line from the subject's point of view.
pub fn outcome(own: i32, opponent: i32) -> MatchOutcome {
    if own > opponent {
        MatchOutcome::Win
    } else if own < opponent {
        MatchOutcome::Loss
    } else {
        MatchOutcome::Draw
    }
}

/// Integer win percentage over all decided games, 0 when none played.
pub fn win_rate(wins: i32, losses: i32, draws: i32) -> i32 {
    let total = wins + losses + draws;
    if total == 0 {
        return 0;
    }
    ((wins as f64 / total as f64) * 100.0).round() as i32
}

/// Apply one approved score line to a player's cumulative counters.
///
/// The streak this produces is exact when lines are applied in chronological
/// order; out-of-order callers must overwrite `win_streak` from history.
pub fn apply_score(player: &mut Player, own: i32, opponent: i32) {
    match outcome(own, opponent) {
        MatchOutcome::Win => {
            player.wins += 1;
            player.win_streak += 1;
        }
        MatchOutcome::Draw => {
            player.draws += 1;
            player.win_streak = 0;
        }
        MatchOutcome::Loss => {
            player.losses += 1;
            player.win_streak = 0;
        }
    }

    player.goals_scored += own;
    player.goals_conceded += opponent;
    player.matches_played += 1;
    if opponent == 0 {
        player.clean_sheets += 1;
    }
    player.win_rate = win_rate(player.wins, player.losses, player.draws);
}

/// Remove a previously applied score line, the inverse of [`apply_score`].
///
/// `win_streak` is left untouched; it cannot be un-applied locally and must
/// be recomputed from ordered history afterwards.
pub fn revert_score(player: &mut Player, own: i32, opponent: i32) {
    match outcome(own, opponent) {
        MatchOutcome::Win => player.wins -= 1,
        MatchOutcome::Draw => player.draws -= 1,
        MatchOutcome::Loss => player.losses -= 1,
    }

    player.goals_scored -= own;
    player.goals_conceded -= opponent;
    player.matches_played -= 1;
    if opponent == 0 {
        player.clean_sheets -= 1;
    }
    player.win_rate = win_rate(player.wins, player.losses, player.draws);
}

/// Consecutive wins counted from the most recent result.
pub fn current_streak(recent_first: &[MatchOutcome]) -> i32 {
    recent_first
        .iter()
        .take_while(|o| **o == MatchOutcome::Win)
        .count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn blank_player() -> Player {
        Player {
            player_id: Uuid::nil(),
            handle: "tester".into(),
            display_name: "Tester".into(),
            campus: None,
            phone: None,
            avatar_url: None,
            wins: 0,
            losses: 0,
            draws: 0,
            goals_scored: 0,
            goals_conceded: 0,
            clean_sheets: 0,
            matches_played: 0,
            win_streak: 0,
            win_rate: 0,
            no_shows: 0,
            reliability_score: Decimal::from(100),
            consistency_rating: Decimal::ZERO,
            flagged_for_review: false,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn win_rate_is_zero_without_games() {
        assert_eq!(win_rate(0, 0, 0), 0);
    }

    #[test]
    fn win_rate_rounds_to_integer_percent() {
        assert_eq!(win_rate(3, 1, 0), 75);
        assert_eq!(win_rate(1, 2, 0), 33);
        assert_eq!(win_rate(2, 1, 0), 67);
    }

    #[test]
    fn apply_score_updates_all_counters() {
        let mut p = blank_player();
        apply_score(&mut p, 3, 0);

        assert_eq!(p.wins, 1);
        assert_eq!(p.win_streak, 1);
        assert_eq!(p.goals_scored, 3);
        assert_eq!(p.goals_conceded, 0);
        assert_eq!(p.clean_sheets, 1);
        assert_eq!(p.matches_played, 1);
        assert_eq!(p.win_rate, 100);
    }

    #[test]
    fn draw_and_loss_reset_streak() {
        let mut p = blank_player();
        apply_score(&mut p, 2, 0);
        apply_score(&mut p, 1, 0);
        assert_eq!(p.win_streak, 2);

        apply_score(&mut p, 1, 1);
        assert_eq!(p.win_streak, 0);
        assert_eq!(p.draws, 1);

        apply_score(&mut p, 3, 1);
        apply_score(&mut p, 0, 2);
        assert_eq!(p.win_streak, 0);
        assert_eq!(p.losses, 1);
    }

    #[test]
    fn revert_undoes_apply() {
        let mut p = blank_player();
        apply_score(&mut p, 2, 2);
        apply_score(&mut p, 4, 0);
        revert_score(&mut p, 4, 0);

        assert_eq!(p.wins, 0);
        assert_eq!(p.draws, 1);
        assert_eq!(p.goals_scored, 2);
        assert_eq!(p.goals_conceded, 2);
        assert_eq!(p.clean_sheets, 0);
        assert_eq!(p.matches_played, 1);
        assert_eq!(p.win_rate, 0);
    }

    #[test]
    fn streak_counts_leading_wins_only() {
        use MatchOutcome::*;
        assert_eq!(current_streak(&[]), 0);
        assert_eq!(current_streak(&[Win, Win, Loss, Win]), 2);
        assert_eq!(current_streak(&[Draw, Win, Win]), 0);
        assert_eq!(current_streak(&[Win; 7]), 7);
    }
}
