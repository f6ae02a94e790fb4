use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tournament_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Active,
    Completed,
    Cancelled,
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentStatus::Active => write!(f, "active"),
            TournamentStatus::Completed => write!(f, "completed"),
            TournamentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Entry fee and prize pool are whole KES amounts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tournament {
    pub tournament_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub game_edition: String,
    pub entry_fee: i64,
    pub prize_pool: i64,
    pub max_participants: i32,
    pub organizer_id: Option<Uuid>,
    pub banner_url: Option<String>,
    pub status: TournamentStatus,
    pub created_at: NaiveDateTime,
}
