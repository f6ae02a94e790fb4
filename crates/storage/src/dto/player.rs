use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Player;

/// Basic player profile with cumulative stats.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
    pub player_id: Uuid,
    pub handle: String,
    pub display_name: String,
    pub campus: Option<String>,
    pub avatar_url: Option<String>,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub goals_scored: i32,
    pub goals_conceded: i32,
    pub clean_sheets: i32,
    pub matches_played: i32,
    pub win_streak: i32,
    pub win_rate: i32,
    pub no_shows: i32,
    pub reliability_score: Decimal,
    pub consistency_rating: Decimal,
    pub flagged_for_review: bool,
    pub created_at: NaiveDateTime,
}

impl From<Player> for PlayerResponse {
    fn from(p: Player) -> Self {
        Self {
            player_id: p.player_id,
            handle: p.handle,
            display_name: p.display_name,
            campus: p.campus,
            avatar_url: p.avatar_url,
            wins: p.wins,
            losses: p.losses,
            draws: p.draws,
            goals_scored: p.goals_scored,
            goals_conceded: p.goals_conceded,
            clean_sheets: p.clean_sheets,
            matches_played: p.matches_played,
            win_streak: p.win_streak,
            win_rate: p.win_rate,
            no_shows: p.no_shows,
            reliability_score: p.reliability_score,
            consistency_rating: p.consistency_rating,
            flagged_for_review: p.flagged_for_review,
            created_at: p.created_at,
        }
    }
}

/// Current form over the last few approved matches.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormSummary {
    pub score: Decimal,
    pub label: String,
    /// Most recent first, `W`/`D`/`L`.
    pub last_results: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReliabilitySummary {
    pub score: Decimal,
    pub risk: String,
}

/// Profile plus derived analytics and recent match history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerDetailResponse {
    #[serde(flatten)]
    pub player: PlayerResponse,
    pub form: FormSummary,
    pub reliability: ReliabilitySummary,
    pub recent_matches: Vec<super::matches::MatchResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePlayerRequest {
    #[validate(length(
        min = 3,
        max = 32,
        message = "Handle must be between 3 and 32 characters"
    ))]
    pub handle: String,

    #[validate(length(min = 1, max = 100))]
    pub display_name: String,

    #[validate(length(max = 100))]
    pub campus: Option<String>,

    #[validate(length(min = 9, max = 20))]
    pub phone: Option<String>,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 1, max = 100))]
    pub display_name: Option<String>,

    #[validate(length(max = 100))]
    pub campus: Option<String>,

    #[validate(length(min = 9, max = 20))]
    pub phone: Option<String>,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub avatar_url: Option<String>,

    pub flagged_for_review: Option<bool>,
}

/// Result of the admin recalculation sweep.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecalculateResponse {
    pub players_updated: u64,
}
