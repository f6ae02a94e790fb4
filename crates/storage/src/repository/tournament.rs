use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tournament::{CreateTournamentRequest, UpdateTournamentRequest};
use crate::error::{Result, StorageError};
use crate::models::{Tournament, TournamentStatus};

const COLUMNS: &str = "tournament_id, name, description, game_edition, entry_fee, prize_pool, \
     max_participants, organizer_id, banner_url, status, created_at";

pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, status: Option<TournamentStatus>) -> Result<Vec<Tournament>> {
        let tournaments = match status {
            Some(status) => {
                sqlx::query_as::<_, Tournament>(&format!(
                    "SELECT {COLUMNS} FROM tournaments WHERE status = $1 ORDER BY created_at DESC"
                ))
                .bind(status)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Tournament>(&format!(
                    "SELECT {COLUMNS} FROM tournaments ORDER BY created_at DESC"
                ))
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(tournaments)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Tournament> {
        sqlx::query_as::<_, Tournament>(&format!(
            "SELECT {COLUMNS} FROM tournaments WHERE tournament_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateTournamentRequest) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            "INSERT INTO tournaments (name, description, game_edition, entry_fee, prize_pool, \
             max_participants, organizer_id, banner_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {COLUMNS}"
        ))
        .bind(&req.name)
        .bind(req.description.as_deref())
        .bind(&req.game_edition)
        .bind(req.entry_fee)
        .bind(req.prize_pool)
        .bind(req.max_participants)
        .bind(req.organizer_id)
        .bind(req.banner_url.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(tournament)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &Tournament,
        req: &UpdateTournamentRequest,
    ) -> Result<Tournament> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let description = req.description.as_ref().or(existing.description.as_ref());
        let game_edition = req.game_edition.as_ref().unwrap_or(&existing.game_edition);
        let entry_fee = req.entry_fee.unwrap_or(existing.entry_fee);
        let prize_pool = req.prize_pool.unwrap_or(existing.prize_pool);
        let max_participants = req.max_participants.unwrap_or(existing.max_participants);
        let banner_url = req.banner_url.as_ref().or(existing.banner_url.as_ref());
        let status = req.status.unwrap_or(existing.status);

        sqlx::query_as::<_, Tournament>(&format!(
            "UPDATE tournaments SET name = $2, description = $3, game_edition = $4, \
             entry_fee = $5, prize_pool = $6, max_participants = $7, banner_url = $8, \
             status = $9 WHERE tournament_id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(game_edition)
        .bind(entry_fee)
        .bind(prize_pool)
        .bind(max_participants)
        .bind(banner_url)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM tournaments WHERE tournament_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
