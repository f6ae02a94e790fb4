use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::player::{CreatePlayerRequest, UpdatePlayerRequest};
use crate::error::{Result, StorageError};
use crate::models::Player;

const COLUMNS: &str = "player_id, handle, display_name, campus, phone, avatar_url, \
     wins, losses, draws, goals_scored, goals_conceded, clean_sheets, matches_played, \
     win_streak, win_rate, no_shows, reliability_score, consistency_rating, \
     flagged_for_review, created_at";

pub struct PlayerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Player>> {
        let players =
            sqlx::query_as::<_, Player>(&format!("SELECT {COLUMNS} FROM players ORDER BY handle"))
                .fetch_all(self.pool)
                .await?;

        Ok(players)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Player> {
        sqlx::query_as::<_, Player>(&format!("SELECT {COLUMNS} FROM players WHERE player_id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreatePlayerRequest) -> Result<Player> {
        let created = sqlx::query_as::<_, Player>(&format!(
            "INSERT INTO players (handle, display_name, campus, phone, avatar_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(&req.handle)
        .bind(&req.display_name)
        .bind(req.campus.as_deref())
        .bind(req.phone.as_deref())
        .bind(req.avatar_url.as_deref())
        .fetch_one(self.pool)
        .await;

        match created {
            Ok(player) => Ok(player),
            Err(e) => {
                let err = StorageError::from(e);
                if err.is_unique_violation() {
                    Err(StorageError::ConstraintViolation(
                        "handle is already taken".into(),
                    ))
                } else {
                    Err(err)
                }
            }
        }
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &Player,
        req: &UpdatePlayerRequest,
    ) -> Result<Player> {
        let display_name = req.display_name.as_ref().unwrap_or(&existing.display_name);
        let campus = req.campus.as_ref().or(existing.campus.as_ref());
        let phone = req.phone.as_ref().or(existing.phone.as_ref());
        let avatar_url = req.avatar_url.as_ref().or(existing.avatar_url.as_ref());
        let flagged = req
            .flagged_for_review
            .unwrap_or(existing.flagged_for_review);

        sqlx::query_as::<_, Player>(&format!(
            "UPDATE players SET display_name = $2, campus = $3, phone = $4, avatar_url = $5, \
             flagged_for_review = $6 WHERE player_id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(display_name)
        .bind(campus)
        .bind(phone)
        .bind(avatar_url)
        .bind(flagged)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM players WHERE player_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
