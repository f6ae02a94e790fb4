use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Dispute;

const COLUMNS: &str = "dispute_id, match_id, reported_by, against, reason, outcome, no_show, \
     notes, created_at, resolved_at";

pub struct DisputeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DisputeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, resolved: Option<bool>) -> Result<Vec<Dispute>> {
        let disputes = match resolved {
            Some(true) => {
                sqlx::query_as::<_, Dispute>(&format!(
                    "SELECT {COLUMNS} FROM disputes WHERE resolved_at IS NOT NULL \
                     ORDER BY created_at DESC"
                ))
                .fetch_all(self.pool)
                .await?
            }
            Some(false) => {
                sqlx::query_as::<_, Dispute>(&format!(
                    "SELECT {COLUMNS} FROM disputes WHERE resolved_at IS NULL \
                     ORDER BY created_at DESC"
                ))
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Dispute>(&format!(
                    "SELECT {COLUMNS} FROM disputes ORDER BY created_at DESC"
                ))
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(disputes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Dispute> {
        sqlx::query_as::<_, Dispute>(&format!(
            "SELECT {COLUMNS} FROM disputes WHERE dispute_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }
}
