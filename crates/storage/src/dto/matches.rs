use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Match, MatchStatus};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchResponse {
    pub match_id: Uuid,
    pub tournament_id: Option<Uuid>,
    pub home_player_id: Uuid,
    pub away_player_id: Uuid,
    pub home_score: i32,
    pub away_score: i32,
    pub status: MatchStatus,
    pub submitted_by: Option<Uuid>,
    pub dispute_reason: Option<String>,
    pub created_at: NaiveDateTime,
    pub approved_at: Option<NaiveDateTime>,
}

impl From<Match> for MatchResponse {
    fn from(m: Match) -> Self {
        Self {
            match_id: m.match_id,
            tournament_id: m.tournament_id,
            home_player_id: m.home_player_id,
            away_player_id: m.away_player_id,
            home_score: m.home_score,
            away_score: m.away_score,
            status: m.status,
            submitted_by: m.submitted_by,
            dispute_reason: m.dispute_reason,
            created_at: m.created_at,
            approved_at: m.approved_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitMatchRequest {
    pub tournament_id: Option<Uuid>,

    pub home_player_id: Uuid,
    pub away_player_id: Uuid,

    #[validate(range(min = 0, max = 99))]
    pub home_score: i32,

    #[validate(range(min = 0, max = 99))]
    pub away_score: i32,

    /// The player submitting the result, when not entered by an admin.
    pub submitted_by: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DisputeMatchRequest {
    pub reported_by: Uuid,

    #[validate(length(
        min = 5,
        max = 1000,
        message = "Dispute reason must be between 5 and 1000 characters"
    ))]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CorrectScoresRequest {
    #[validate(range(min = 0, max = 99))]
    pub home_score: i32,

    #[validate(range(min = 0, max = 99))]
    pub away_score: i32,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct MatchListQuery {
    pub status: Option<MatchStatus>,
    pub player_id: Option<Uuid>,
}
