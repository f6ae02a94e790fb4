use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Registration, RegistrationStatus, TournamentStatus};

const COLUMNS: &str =
    "registration_id, tournament_id, player_id, status, created_at, decided_at";

pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Request to join a tournament. Fails when the tournament is not active,
    /// already full of approved players, or the player already asked.
    pub async fn create(&self, tournament_id: Uuid, player_id: Uuid) -> Result<Registration> {
        let mut tx = self.pool.begin().await?;

        let tournament: (TournamentStatus, i32) = sqlx::query_as(
            "SELECT status, max_participants FROM tournaments WHERE tournament_id = $1 FOR UPDATE",
        )
        .bind(tournament_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        if tournament.0 != TournamentStatus::Active {
            return Err(StorageError::InvalidTransition(format!(
                "tournament is {}, registration is closed",
                tournament.0
            )));
        }

        let approved: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tournament_registrations \
             WHERE tournament_id = $1 AND status = $2",
        )
        .bind(tournament_id)
        .bind(RegistrationStatus::Approved)
        .fetch_one(&mut *tx)
        .await?;

        if approved >= tournament.1 as i64 {
            return Err(StorageError::ConstraintViolation(
                "tournament is already at capacity".into(),
            ));
        }

        let created = sqlx::query_as::<_, Registration>(&format!(
            "INSERT INTO tournament_registrations (tournament_id, player_id) \
             VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(tournament_id)
        .bind(player_id)
        .fetch_one(&mut *tx)
        .await;

        let registration = match created {
            Ok(r) => r,
            Err(e) => {
                let err = StorageError::from(e);
                return if err.is_unique_violation() {
                    Err(StorageError::ConstraintViolation(
                        "player has already requested to join this tournament".into(),
                    ))
                } else if err.is_foreign_key_violation() {
                    Err(StorageError::NotFound)
                } else {
                    Err(err)
                };
            }
        };

        tx.commit().await?;

        Ok(registration)
    }

    pub async fn list_for_tournament(
        &self,
        tournament_id: Uuid,
        status: Option<RegistrationStatus>,
    ) -> Result<Vec<Registration>> {
        let registrations = match status {
            Some(status) => {
                sqlx::query_as::<_, Registration>(&format!(
                    "SELECT {COLUMNS} FROM tournament_registrations \
                     WHERE tournament_id = $1 AND status = $2 ORDER BY created_at"
                ))
                .bind(tournament_id)
                .bind(status)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Registration>(&format!(
                    "SELECT {COLUMNS} FROM tournament_registrations \
                     WHERE tournament_id = $1 ORDER BY created_at"
                ))
                .bind(tournament_id)
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(registrations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Registration> {
        sqlx::query_as::<_, Registration>(&format!(
            "SELECT {COLUMNS} FROM tournament_registrations WHERE registration_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Flip a registration's status, enforcing the allowed source states.
    pub async fn decide(
        &self,
        id: Uuid,
        allowed_from: &[RegistrationStatus],
        to: RegistrationStatus,
    ) -> Result<Registration> {
        let existing = self.find_by_id(id).await?;

        if !allowed_from.contains(&existing.status) {
            return Err(StorageError::InvalidTransition(format!(
                "registration is {}, cannot move to {}",
                existing.status, to
            )));
        }

        let updated = sqlx::query_as::<_, Registration>(&format!(
            "UPDATE tournament_registrations SET status = $2, decided_at = now() \
             WHERE registration_id = $1 AND status = $3 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(to)
        .bind(existing.status)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| {
            StorageError::InvalidTransition("registration changed concurrently".into())
        })?;

        Ok(updated)
    }
}
