use sqlx::PgPool;
use storage::{
    dto::boardroom::PostMessageRequest, error::Result, models::BoardroomMessage,
    repository::boardroom::BoardroomRepository,
};

/// Latest messages, newest last
pub async fn recent_messages(pool: &PgPool, limit: Option<i64>) -> Result<Vec<BoardroomMessage>> {
    let repo = BoardroomRepository::new(pool);
    repo.recent(limit).await
}

/// Persist a message
pub async fn post_message(pool: &PgPool, request: &PostMessageRequest) -> Result<BoardroomMessage> {
    let repo = BoardroomRepository::new(pool);
    repo.post(request).await
}
