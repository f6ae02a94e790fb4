use sqlx::PgPool;
use storage::{
    dto::matches::{MatchListQuery, SubmitMatchRequest},
    error::Result,
    models::{Dispute, Match},
    repository::matches::MatchRepository,
    services::match_flow,
};
use uuid::Uuid;

/// Submit a match result for admin review
pub async fn submit_match(pool: &PgPool, request: &SubmitMatchRequest) -> Result<Match> {
    let repo = MatchRepository::new(pool);
    repo.create(request).await
}

/// List matches with optional filters
pub async fn list_matches(pool: &PgPool, filter: &MatchListQuery) -> Result<Vec<Match>> {
    let repo = MatchRepository::new(pool);
    repo.list(filter).await
}

/// Get match by id
pub async fn get_match(pool: &PgPool, id: Uuid) -> Result<Match> {
    let repo = MatchRepository::new(pool);
    repo.find_by_id(id).await
}

/// Approve a match and fold it into both players' stats
pub async fn approve_match(pool: &PgPool, id: Uuid) -> Result<Match> {
    match_flow::approve_match(pool, id).await
}

/// Reject a match without touching stats
pub async fn reject_match(pool: &PgPool, id: Uuid) -> Result<Match> {
    match_flow::reject_match(pool, id).await
}

/// File a dispute against a pending match
pub async fn dispute_match(
    pool: &PgPool,
    match_id: Uuid,
    reported_by: Uuid,
    reason: &str,
) -> Result<Dispute> {
    match_flow::file_dispute(pool, match_id, reported_by, reason).await
}

/// Correct the scores of an approved match
pub async fn correct_scores(
    pool: &PgPool,
    match_id: Uuid,
    home_score: i32,
    away_score: i32,
) -> Result<Match> {
    match_flow::correct_scores(pool, match_id, home_score, away_score).await
}
