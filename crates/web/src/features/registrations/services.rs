use sqlx::PgPool;
use storage::{
    error::Result,
    models::{Registration, RegistrationStatus},
    repository::registration::RegistrationRepository,
};
use uuid::Uuid;

/// Request to join a tournament
pub async fn join_tournament(
    pool: &PgPool,
    tournament_id: Uuid,
    player_id: Uuid,
) -> Result<Registration> {
    let repo = RegistrationRepository::new(pool);
    repo.create(tournament_id, player_id).await
}

/// List a tournament's registrations, optionally by status
pub async fn list_registrations(
    pool: &PgPool,
    tournament_id: Uuid,
    status: Option<RegistrationStatus>,
) -> Result<Vec<Registration>> {
    let repo = RegistrationRepository::new(pool);
    repo.list_for_tournament(tournament_id, status).await
}

/// Approve a pending registration
pub async fn approve_registration(pool: &PgPool, id: Uuid) -> Result<Registration> {
    let repo = RegistrationRepository::new(pool);
    repo.decide(
        id,
        &[RegistrationStatus::Pending],
        RegistrationStatus::Approved,
    )
    .await
}

/// Reject a pending registration
pub async fn reject_registration(pool: &PgPool, id: Uuid) -> Result<Registration> {
    let repo = RegistrationRepository::new(pool);
    repo.decide(
        id,
        &[RegistrationStatus::Pending],
        RegistrationStatus::Rejected,
    )
    .await
}

/// Remove an approved player from a tournament
pub async fn remove_registration(pool: &PgPool, id: Uuid) -> Result<Registration> {
    let repo = RegistrationRepository::new(pool);
    repo.decide(
        id,
        &[RegistrationStatus::Approved],
        RegistrationStatus::Removed,
    )
    .await
}
