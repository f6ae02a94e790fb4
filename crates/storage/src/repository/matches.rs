use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::matches::{MatchListQuery, SubmitMatchRequest};
use crate::error::{Result, StorageError};
use crate::models::Match;

const COLUMNS: &str = "match_id, tournament_id, home_player_id, away_player_id, home_score, \
     away_score, status, submitted_by, dispute_reason, created_at, approved_at";

pub struct MatchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &SubmitMatchRequest) -> Result<Match> {
        if req.home_player_id == req.away_player_id {
            return Err(StorageError::ConstraintViolation(
                "a match needs two different players".into(),
            ));
        }

        let created = sqlx::query_as::<_, Match>(&format!(
            "INSERT INTO matches (tournament_id, home_player_id, away_player_id, home_score, \
             away_score, submitted_by) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        ))
        .bind(req.tournament_id)
        .bind(req.home_player_id)
        .bind(req.away_player_id)
        .bind(req.home_score)
        .bind(req.away_score)
        .bind(req.submitted_by)
        .fetch_one(self.pool)
        .await;

        match created {
            Ok(m) => Ok(m),
            Err(e) => {
                let err = StorageError::from(e);
                if err.is_foreign_key_violation() {
                    Err(StorageError::ConstraintViolation(
                        "referenced player or tournament does not exist".into(),
                    ))
                } else {
                    Err(err)
                }
            }
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Match> {
        sqlx::query_as::<_, Match>(&format!("SELECT {COLUMNS} FROM matches WHERE match_id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn list(&self, filter: &MatchListQuery) -> Result<Vec<Match>> {
        let mut query = sqlx::QueryBuilder::new(format!(
            "SELECT {COLUMNS} FROM matches WHERE 1=1"
        ));

        if let Some(status) = filter.status {
            query.push(" AND status = ");
            query.push_bind(status);
        }
        if let Some(player_id) = filter.player_id {
            query.push(" AND (home_player_id = ");
            query.push_bind(player_id);
            query.push(" OR away_player_id = ");
            query.push_bind(player_id);
            query.push(")");
        }

        query.push(" ORDER BY created_at DESC");

        let matches = query
            .build_query_as::<Match>()
            .fetch_all(self.pool)
            .await?;

        Ok(matches)
    }

    /// Recent approved matches a player took part in, newest first.
    pub async fn recent_for_player(&self, player_id: Uuid, limit: i64) -> Result<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {COLUMNS} FROM matches \
             WHERE status = 'approved' AND (home_player_id = $1 OR away_player_id = $1) \
             ORDER BY approved_at DESC NULLS LAST, created_at DESC LIMIT $2"
        ))
        .bind(player_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(matches)
    }
}
