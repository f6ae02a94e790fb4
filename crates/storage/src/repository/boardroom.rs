use sqlx::PgPool;

use crate::dto::boardroom::PostMessageRequest;
use crate::error::Result;
use crate::models::BoardroomMessage;

const COLUMNS: &str = "message_id, player_id, handle, body, created_at";

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

pub struct BoardroomRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BoardroomRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Latest messages in chronological order (newest last), the shape a chat
    /// view renders directly.
    pub async fn recent(&self, limit: Option<i64>) -> Result<Vec<BoardroomMessage>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let mut messages = sqlx::query_as::<_, BoardroomMessage>(&format!(
            "SELECT {COLUMNS} FROM boardroom_messages ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        messages.reverse();
        Ok(messages)
    }

    pub async fn post(&self, req: &PostMessageRequest) -> Result<BoardroomMessage> {
        let message = sqlx::query_as::<_, BoardroomMessage>(&format!(
            "INSERT INTO boardroom_messages (player_id, handle, body) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(req.player_id)
        .bind(&req.handle)
        .bind(&req.body)
        .fetch_one(self.pool)
        .await?;

        Ok(message)
    }
}
