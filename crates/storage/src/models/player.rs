use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A community member with their cumulative match statistics.
///
/// Counters are only ever mutated through the stat-update services so that
/// approval, correction and the recalculation sweep agree on the arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Player {
    pub player_id: Uuid,
    pub handle: String,
    pub display_name: String,
    pub campus: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub goals_scored: i32,
    pub goals_conceded: i32,
    pub clean_sheets: i32,
    pub matches_played: i32,
    pub win_streak: i32,
    /// Integer percentage, 0 when no games have been played.
    pub win_rate: i32,
    pub no_shows: i32,
    pub reliability_score: Decimal,
    pub consistency_rating: Decimal,
    pub flagged_for_review: bool,
    pub created_at: NaiveDateTime,
}
