use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::BoardroomMessage;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BoardroomMessageResponse {
    pub message_id: Uuid,
    pub player_id: Option<Uuid>,
    pub handle: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}

impl From<BoardroomMessage> for BoardroomMessageResponse {
    fn from(m: BoardroomMessage) -> Self {
        Self {
            message_id: m.message_id,
            player_id: m.player_id,
            handle: m.handle,
            body: m.body,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PostMessageRequest {
    pub player_id: Option<Uuid>,

    #[validate(length(min = 1, max = 32))]
    pub handle: String,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Message must be between 1 and 500 characters"
    ))]
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct MessageListQuery {
    /// How many of the latest messages to return, newest last.
    pub limit: Option<i64>,
}
