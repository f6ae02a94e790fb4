use sqlx::postgres::PgExecutor;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Dispute, DisputeOutcome, Match, MatchOutcome, MatchStatus, Player};
use crate::services::form::{self, FORM_WINDOW};
use crate::services::{reliability, stats};

const MATCH_COLUMNS: &str = "match_id, tournament_id, home_player_id, away_player_id, \
     home_score, away_score, status, submitted_by, dispute_reason, created_at, approved_at";

const PLAYER_COLUMNS: &str = "player_id, handle, display_name, campus, phone, avatar_url, \
     wins, losses, draws, goals_scored, goals_conceded, clean_sheets, matches_played, \
     win_streak, win_rate, no_shows, reliability_score, consistency_rating, \
     flagged_for_review, created_at";

const DISPUTE_COLUMNS: &str = "dispute_id, match_id, reported_by, against, reason, outcome, \
     no_show, notes, created_at, resolved_at";

/// An admin's ruling on an open dispute.
#[derive(Debug, Clone)]
pub struct DisputeRuling {
    pub outcome: DisputeOutcome,
    pub corrected_home_score: Option<i32>,
    pub corrected_away_score: Option<i32>,
    pub no_show: bool,
    pub notes: Option<String>,
}

/// Approve a pending or disputed match and apply the stat update to both
/// players. Everything runs in one transaction; a match in any other state
/// is rejected, so approval can never double-apply.
pub async fn approve_match(pool: &PgPool, match_id: Uuid) -> Result<Match> {
    let mut tx = pool.begin().await?;

    let m = lock_match(&mut tx, match_id).await?;
    guard_open(&m, "approve")?;
    let approved = approve_locked(&mut tx, m.match_id).await?;

    tx.commit().await?;
    tracing::info!(match_id = %match_id, "match approved");

    Ok(approved)
}

/// Reject a pending or disputed match. No stats are touched.
pub async fn reject_match(pool: &PgPool, match_id: Uuid) -> Result<Match> {
    let mut tx = pool.begin().await?;

    let m = lock_match(&mut tx, match_id).await?;
    guard_open(&m, "reject")?;
    let rejected = set_status(&mut tx, m.match_id, MatchStatus::Rejected).await?;

    tx.commit().await?;
    tracing::info!(match_id = %match_id, "match rejected");

    Ok(rejected)
}

/// Correct the scores of an already-approved match: the previous contribution
/// is reverted, the new one applied, and the win streak recomputed from the
/// full ordered history rather than guessed at.
pub async fn correct_scores(
    pool: &PgPool,
    match_id: Uuid,
    home_score: i32,
    away_score: i32,
) -> Result<Match> {
    if home_score < 0 || away_score < 0 {
        return Err(StorageError::ConstraintViolation(
            "scores must be non-negative".into(),
        ));
    }

    let mut tx = pool.begin().await?;

    let old = lock_match(&mut tx, match_id).await?;
    if old.status != MatchStatus::Approved {
        return Err(StorageError::InvalidTransition(format!(
            "only approved matches can be corrected, match is {}",
            old.status
        )));
    }

    let updated = sqlx::query_as::<_, Match>(&format!(
        "UPDATE matches SET home_score = $2, away_score = $3 WHERE match_id = $1 \
         RETURNING {MATCH_COLUMNS}"
    ))
    .bind(match_id)
    .bind(home_score)
    .bind(away_score)
    .fetch_one(&mut *tx)
    .await?;

    for player_id in lock_order(&updated) {
        let mut player = lock_player(&mut tx, player_id).await?;

        let (old_own, old_opp) = scores_for(&old, player_id)?;
        let (new_own, new_opp) = scores_for(&updated, player_id)?;
        stats::revert_score(&mut player, old_own, old_opp);
        stats::apply_score(&mut player, new_own, new_opp);

        let history = outcomes_for(&mut *tx, player_id, None).await?;
        player.win_streak = stats::current_streak(&history);

        refresh_ratings(&mut tx, &mut player).await?;
        write_stats(&mut *tx, &player).await?;
    }

    tx.commit().await?;
    tracing::info!(match_id = %match_id, home_score, away_score, "match scores corrected");

    Ok(updated)
}

/// File a dispute against a pending match. Flips the match to `disputed` and
/// opens a dispute record naming the other player.
pub async fn file_dispute(
    pool: &PgPool,
    match_id: Uuid,
    reported_by: Uuid,
    reason: &str,
) -> Result<Dispute> {
    let mut tx = pool.begin().await?;

    let m = lock_match(&mut tx, match_id).await?;
    if m.status != MatchStatus::Pending {
        return Err(StorageError::InvalidTransition(format!(
            "only pending matches can be disputed, match is {}",
            m.status
        )));
    }
    if !m.involves(reported_by) {
        return Err(StorageError::ConstraintViolation(
            "reporter is not part of this match".into(),
        ));
    }

    let against = if reported_by == m.home_player_id {
        m.away_player_id
    } else {
        m.home_player_id
    };

    sqlx::query("UPDATE matches SET status = $2, dispute_reason = $3 WHERE match_id = $1")
        .bind(match_id)
        .bind(MatchStatus::Disputed)
        .bind(reason)
        .execute(&mut *tx)
        .await?;

    let dispute = sqlx::query_as::<_, Dispute>(&format!(
        "INSERT INTO disputes (match_id, reported_by, against, reason) \
         VALUES ($1, $2, $3, $4) RETURNING {DISPUTE_COLUMNS}"
    ))
    .bind(match_id)
    .bind(reported_by)
    .bind(against)
    .bind(reason)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(match_id = %match_id, dispute_id = %dispute.dispute_id, "dispute filed");

    Ok(dispute)
}

/// Resolve an open dispute.
///
/// `overturned` approves the match as submitted; `upheld` approves it with
/// the admin's corrected scores, or throws the result out entirely when no
/// correction is supplied. When `no_show` is set the losing side of the
/// ruling picks up a no-show, a fresh reliability score and a review flag.
pub async fn resolve_dispute(
    pool: &PgPool,
    dispute_id: Uuid,
    ruling: DisputeRuling,
) -> Result<Dispute> {
    let mut tx = pool.begin().await?;

    let dispute = sqlx::query_as::<_, Dispute>(&format!(
        "SELECT {DISPUTE_COLUMNS} FROM disputes WHERE dispute_id = $1 FOR UPDATE"
    ))
    .bind(dispute_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(StorageError::NotFound)?;

    if dispute.is_resolved() {
        return Err(StorageError::InvalidTransition(
            "dispute is already resolved".into(),
        ));
    }

    let m = lock_match(&mut tx, dispute.match_id).await?;
    if m.status != MatchStatus::Disputed {
        return Err(StorageError::InvalidTransition(format!(
            "disputed match is {}, cannot resolve",
            m.status
        )));
    }

    match ruling.outcome {
        DisputeOutcome::Overturned => {
            approve_locked(&mut tx, m.match_id).await?;
        }
        DisputeOutcome::Upheld => {
            match (ruling.corrected_home_score, ruling.corrected_away_score) {
                (Some(home), Some(away)) => {
                    if home < 0 || away < 0 {
                        return Err(StorageError::ConstraintViolation(
                            "scores must be non-negative".into(),
                        ));
                    }
                    sqlx::query(
                        "UPDATE matches SET home_score = $2, away_score = $3 WHERE match_id = $1",
                    )
                    .bind(m.match_id)
                    .bind(home)
                    .bind(away)
                    .execute(&mut *tx)
                    .await?;
                    approve_locked(&mut tx, m.match_id).await?;
                }
                _ => {
                    set_status(&mut tx, m.match_id, MatchStatus::Rejected).await?;
                }
            }
        }
    }

    if ruling.no_show {
        let loser_id = match ruling.outcome {
            DisputeOutcome::Upheld => dispute.against,
            DisputeOutcome::Overturned => dispute.reported_by,
        };

        // Re-read: the approval above may have already rewritten this row.
        let mut loser = lock_player(&mut tx, loser_id).await?;
        loser.no_shows += 1;
        loser.flagged_for_review = true;
        loser.reliability_score =
            reliability::reliability(loser.matches_played, loser.no_shows).score;
        write_stats(&mut *tx, &loser).await?;
    }

    let resolved = sqlx::query_as::<_, Dispute>(&format!(
        "UPDATE disputes SET outcome = $2, no_show = $3, notes = $4, resolved_at = now() \
         WHERE dispute_id = $1 RETURNING {DISPUTE_COLUMNS}"
    ))
    .bind(dispute_id)
    .bind(ruling.outcome)
    .bind(ruling.no_show)
    .bind(ruling.notes.as_deref())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(
        dispute_id = %dispute_id,
        outcome = %ruling.outcome,
        no_show = ruling.no_show,
        "dispute resolved"
    );

    Ok(resolved)
}

/// Recompute every player's counters, streak, form and reliability from their
/// approved match history. Returns how many players were rewritten.
pub async fn recalculate_all(pool: &PgPool) -> Result<u64> {
    let players = sqlx::query_as::<_, Player>(&format!("SELECT {PLAYER_COLUMNS} FROM players"))
        .fetch_all(pool)
        .await?;

    let mut count = 0u64;

    for mut player in players {
        let lines = score_lines(pool, player.player_id, Ordering::Ascending, None).await?;

        player.wins = 0;
        player.losses = 0;
        player.draws = 0;
        player.goals_scored = 0;
        player.goals_conceded = 0;
        player.clean_sheets = 0;
        player.matches_played = 0;
        player.win_streak = 0;
        player.win_rate = 0;

        // Chronological replay keeps the streak exact as a side effect.
        for line in &lines {
            let (own, opp) = line.perspective(player.player_id);
            stats::apply_score(&mut player, own, opp);
        }

        let recent: Vec<MatchOutcome> = lines
            .iter()
            .rev()
            .take(FORM_WINDOW)
            .map(|l| {
                let (own, opp) = l.perspective(player.player_id);
                stats::outcome(own, opp)
            })
            .collect();
        player.consistency_rating = form::consistency(&recent).score;
        player.reliability_score =
            reliability::reliability(player.matches_played, player.no_shows).score;

        write_stats(pool, &player).await?;
        count += 1;
    }

    tracing::info!(players = count, "stat recalculation sweep finished");

    Ok(count)
}

/// Most-recent-first outcomes of approved matches for a player.
pub async fn recent_form(pool: &PgPool, player_id: Uuid, limit: usize) -> Result<Vec<MatchOutcome>> {
    outcomes_for(pool, player_id, Some(limit as i64)).await
}

#[derive(Debug, sqlx::FromRow)]
struct ScoreLine {
    home_player_id: Uuid,
    away_player_id: Uuid,
    home_score: i32,
    away_score: i32,
}

impl ScoreLine {
    fn perspective(&self, player_id: Uuid) -> (i32, i32) {
        if player_id == self.home_player_id {
            (self.home_score, self.away_score)
        } else {
            (self.away_score, self.home_score)
        }
    }
}

#[derive(Clone, Copy)]
enum Ordering {
    Ascending,
    Descending,
}

async fn score_lines<'e>(
    exec: impl PgExecutor<'e>,
    player_id: Uuid,
    order: Ordering,
    limit: Option<i64>,
) -> Result<Vec<ScoreLine>> {
    let order_clause = match order {
        Ordering::Ascending => "ORDER BY approved_at ASC NULLS LAST, created_at ASC",
        Ordering::Descending => "ORDER BY approved_at DESC NULLS LAST, created_at DESC",
    };
    let limit_clause = match limit {
        Some(_) => "LIMIT $3",
        None => "",
    };

    let sql = format!(
        "SELECT home_player_id, away_player_id, home_score, away_score FROM matches \
         WHERE status = $1 AND (home_player_id = $2 OR away_player_id = $2) \
         {order_clause} {limit_clause}"
    );

    let mut query = sqlx::query_as::<_, ScoreLine>(&sql)
        .bind(MatchStatus::Approved)
        .bind(player_id);
    if let Some(limit) = limit {
        query = query.bind(limit);
    }

    Ok(query.fetch_all(exec).await?)
}

async fn outcomes_for<'e>(
    exec: impl PgExecutor<'e>,
    player_id: Uuid,
    limit: Option<i64>,
) -> Result<Vec<MatchOutcome>> {
    let lines = score_lines(exec, player_id, Ordering::Descending, limit).await?;
    Ok(lines
        .iter()
        .map(|l| {
            let (own, opp) = l.perspective(player_id);
            stats::outcome(own, opp)
        })
        .collect())
}

async fn lock_match(tx: &mut Transaction<'_, Postgres>, match_id: Uuid) -> Result<Match> {
    sqlx::query_as::<_, Match>(&format!(
        "SELECT {MATCH_COLUMNS} FROM matches WHERE match_id = $1 FOR UPDATE"
    ))
    .bind(match_id)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or(StorageError::NotFound)
}

async fn lock_player(tx: &mut Transaction<'_, Postgres>, player_id: Uuid) -> Result<Player> {
    sqlx::query_as::<_, Player>(&format!(
        "SELECT {PLAYER_COLUMNS} FROM players WHERE player_id = $1 FOR UPDATE"
    ))
    .bind(player_id)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or(StorageError::NotFound)
}

fn guard_open(m: &Match, action: &str) -> Result<()> {
    if matches!(m.status, MatchStatus::Pending | MatchStatus::Disputed) {
        Ok(())
    } else {
        Err(StorageError::InvalidTransition(format!(
            "cannot {action} a match in status {}",
            m.status
        )))
    }
}

async fn set_status(
    tx: &mut Transaction<'_, Postgres>,
    match_id: Uuid,
    status: MatchStatus,
) -> Result<Match> {
    Ok(sqlx::query_as::<_, Match>(&format!(
        "UPDATE matches SET status = $2 WHERE match_id = $1 RETURNING {MATCH_COLUMNS}"
    ))
    .bind(match_id)
    .bind(status)
    .fetch_one(&mut **tx)
    .await?)
}

/// Flip the (already guarded and locked) match to approved and fold the
/// result into both players. Players are locked in id order.
async fn approve_locked(tx: &mut Transaction<'_, Postgres>, match_id: Uuid) -> Result<Match> {
    let approved = sqlx::query_as::<_, Match>(&format!(
        "UPDATE matches SET status = $2, approved_at = now() WHERE match_id = $1 \
         RETURNING {MATCH_COLUMNS}"
    ))
    .bind(match_id)
    .bind(MatchStatus::Approved)
    .fetch_one(&mut **tx)
    .await?;

    for player_id in lock_order(&approved) {
        let mut player = lock_player(tx, player_id).await?;
        let (own, opp) = scores_for(&approved, player_id)?;
        stats::apply_score(&mut player, own, opp);
        refresh_ratings(tx, &mut player).await?;
        write_stats(&mut **tx, &player).await?;
    }

    Ok(approved)
}

fn lock_order(m: &Match) -> [Uuid; 2] {
    if m.home_player_id < m.away_player_id {
        [m.home_player_id, m.away_player_id]
    } else {
        [m.away_player_id, m.home_player_id]
    }
}

fn scores_for(m: &Match, player_id: Uuid) -> Result<(i32, i32)> {
    m.scores_for(player_id).ok_or_else(|| {
        StorageError::ConstraintViolation("player is not part of this match".into())
    })
}

/// Recompute the two derived ratings after counters changed. The form query
/// sees this transaction's own writes, so a just-approved match counts.
async fn refresh_ratings(tx: &mut Transaction<'_, Postgres>, player: &mut Player) -> Result<()> {
    let recent = outcomes_for(&mut **tx, player.player_id, Some(FORM_WINDOW as i64)).await?;
    player.consistency_rating = form::consistency(&recent).score;
    player.reliability_score =
        reliability::reliability(player.matches_played, player.no_shows).score;
    Ok(())
}

async fn write_stats<'e>(exec: impl PgExecutor<'e>, player: &Player) -> Result<()> {
    sqlx::query(
        "UPDATE players SET wins = $2, losses = $3, draws = $4, goals_scored = $5, \
         goals_conceded = $6, clean_sheets = $7, matches_played = $8, win_streak = $9, \
         win_rate = $10, no_shows = $11, reliability_score = $12, consistency_rating = $13, \
         flagged_for_review = $14 WHERE player_id = $1",
    )
    .bind(player.player_id)
    .bind(player.wins)
    .bind(player.losses)
    .bind(player.draws)
    .bind(player.goals_scored)
    .bind(player.goals_conceded)
    .bind(player.clean_sheets)
    .bind(player.matches_played)
    .bind(player.win_streak)
    .bind(player.win_rate)
    .bind(player.no_shows)
    .bind(player.reliability_score)
    .bind(player.consistency_rating)
    .bind(player.flagged_for_review)
    .execute(exec)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn sample_match(status: MatchStatus) -> Match {
        Match {
            match_id: Uuid::from_u128(1),
            tournament_id: None,
            home_player_id: Uuid::from_u128(2),
            away_player_id: Uuid::from_u128(3),
            home_score: 2,
            away_score: 1,
            status,
            submitted_by: None,
            dispute_reason: None,
            created_at: NaiveDateTime::default(),
            approved_at: None,
        }
    }

    #[test]
    fn only_pending_or_disputed_matches_are_open() {
        assert!(guard_open(&sample_match(MatchStatus::Pending), "approve").is_ok());
        assert!(guard_open(&sample_match(MatchStatus::Disputed), "approve").is_ok());

        // Re-approving is a conflict, never a silent double application.
        let err = guard_open(&sample_match(MatchStatus::Approved), "approve").unwrap_err();
        assert!(matches!(err, StorageError::InvalidTransition(_)));
        assert!(guard_open(&sample_match(MatchStatus::Rejected), "approve").is_err());
    }

    #[test]
    fn players_lock_in_id_order_regardless_of_sides() {
        let mut m = sample_match(MatchStatus::Pending);
        assert_eq!(m.home_player_id, lock_order(&m)[0]);

        std::mem::swap(&mut m.home_player_id, &mut m.away_player_id);
        assert_eq!(m.away_player_id, lock_order(&m)[0]);
    }

    #[test]
    fn score_line_perspective_swaps_for_the_away_player() {
        let line = ScoreLine {
            home_player_id: Uuid::from_u128(2),
            away_player_id: Uuid::from_u128(3),
            home_score: 4,
            away_score: 1,
        };

        assert_eq!(line.perspective(Uuid::from_u128(2)), (4, 1));
        assert_eq!(line.perspective(Uuid::from_u128(3)), (1, 4));
    }
}
