use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A chat message in the community boardroom. The handle is snapshotted at
/// post time so history survives profile deletions.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BoardroomMessage {
    pub message_id: Uuid,
    pub player_id: Option<Uuid>,
    pub handle: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}
