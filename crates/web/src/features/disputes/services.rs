use sqlx::PgPool;
use storage::{
    dto::dispute::ResolveDisputeRequest,
    error::Result,
    models::Dispute,
    repository::dispute::DisputeRepository,
    services::match_flow::{self, DisputeRuling},
};
use uuid::Uuid;

/// List disputes, optionally only resolved/unresolved ones
pub async fn list_disputes(pool: &PgPool, resolved: Option<bool>) -> Result<Vec<Dispute>> {
    let repo = DisputeRepository::new(pool);
    repo.list(resolved).await
}

/// Get dispute by id
pub async fn get_dispute(pool: &PgPool, id: Uuid) -> Result<Dispute> {
    let repo = DisputeRepository::new(pool);
    repo.find_by_id(id).await
}

/// Rule on an open dispute
pub async fn resolve_dispute(
    pool: &PgPool,
    id: Uuid,
    request: &ResolveDisputeRequest,
) -> Result<Dispute> {
    let ruling = DisputeRuling {
        outcome: request.outcome,
        corrected_home_score: request.corrected_home_score,
        corrected_away_score: request.corrected_away_score,
        no_show: request.no_show,
        notes: request.notes.clone(),
    };

    match_flow::resolve_dispute(pool, id, ruling).await
}
