use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "match_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Approved,
    Rejected,
    Disputed,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Pending => write!(f, "pending"),
            MatchStatus::Approved => write!(f, "approved"),
            MatchStatus::Rejected => write!(f, "rejected"),
            MatchStatus::Disputed => write!(f, "disputed"),
        }
    }
}

/// Result of a match from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    /// Short form used in recent-form summaries.
    pub fn letter(&self) -> &'static str {
        match self {
            MatchOutcome::Win => "W",
            MatchOutcome::Draw => "D",
            MatchOutcome::Loss => "L",
        }
    }
}

/// A submitted match result. Transitions once via admin action; approval is
/// the only transition that touches player statistics.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
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

impl Match {
    pub fn involves(&self, player_id: Uuid) -> bool {
        self.home_player_id == player_id || self.away_player_id == player_id
    }

    /// Scores from the given player's perspective, `(own, opponent)`.
    pub fn scores_for(&self, player_id: Uuid) -> Option<(i32, i32)> {
        if player_id == self.home_player_id {
            Some((self.home_score, self.away_score))
        } else if player_id == self.away_player_id {
            Some((self.away_score, self.home_score))
        } else {
            None
        }
    }
}
