use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Tournament, TournamentStatus};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentResponse {
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

impl From<Tournament> for TournamentResponse {
    fn from(t: Tournament) -> Self {
        Self {
            tournament_id: t.tournament_id,
            name: t.name,
            description: t.description,
            game_edition: t.game_edition,
            entry_fee: t.entry_fee,
            prize_pool: t.prize_pool,
            max_participants: t.max_participants,
            organizer_id: t.organizer_id,
            banner_url: t.banner_url,
            status: t.status,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTournamentRequest {
    #[validate(length(
        min = 3,
        max = 255,
        message = "Tournament name must be between 3 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub game_edition: String,

    #[validate(range(min = 0))]
    pub entry_fee: i64,

    #[validate(range(min = 0))]
    pub prize_pool: i64,

    #[validate(range(min = 2, max = 256))]
    pub max_participants: i32,

    pub organizer_id: Option<Uuid>,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub banner_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTournamentRequest {
    #[validate(length(min = 3, max = 255))]
    pub name: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub game_edition: Option<String>,

    #[validate(range(min = 0))]
    pub entry_fee: Option<i64>,

    #[validate(range(min = 0))]
    pub prize_pool: Option<i64>,

    #[validate(range(min = 2, max = 256))]
    pub max_participants: Option<i32>,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub banner_url: Option<String>,

    pub status: Option<TournamentStatus>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct TournamentListQuery {
    pub status: Option<TournamentStatus>,
}
