use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{Registration, RegistrationStatus};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub registration_id: Uuid,
    pub tournament_id: Uuid,
    pub player_id: Uuid,
    pub status: RegistrationStatus,
    pub created_at: NaiveDateTime,
    pub decided_at: Option<NaiveDateTime>,
}

impl From<Registration> for RegistrationResponse {
    fn from(r: Registration) -> Self {
        Self {
            registration_id: r.registration_id,
            tournament_id: r.tournament_id,
            player_id: r.player_id,
            status: r.status,
            created_at: r.created_at,
            decided_at: r.decided_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JoinTournamentRequest {
    pub player_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RegistrationListQuery {
    pub status: Option<RegistrationStatus>,
}
