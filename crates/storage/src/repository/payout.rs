use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{PayoutBatch, PayoutItem, PayoutItemStatus};
use crate::services::prize::PrizeSplit;

const BATCH_COLUMNS: &str = "batch_id, tournament_id, total_pool, first_prize, second_prize, \
     third_prize, arena_fee, paid_count, failed_count, created_at";

const ITEM_COLUMNS: &str = "item_id, batch_id, place, player_id, phone, amount, status, \
     conversation_id, error_detail, created_at";

pub struct PayoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PayoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_batch(
        &self,
        tournament_id: Uuid,
        total_pool: i64,
        split: &PrizeSplit,
    ) -> Result<PayoutBatch> {
        let batch = sqlx::query_as::<_, PayoutBatch>(&format!(
            "INSERT INTO payout_batches (tournament_id, total_pool, first_prize, second_prize, \
             third_prize, arena_fee) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {BATCH_COLUMNS}"
        ))
        .bind(tournament_id)
        .bind(total_pool)
        .bind(split.first)
        .bind(split.second)
        .bind(split.third)
        .bind(split.arena_fee)
        .fetch_one(self.pool)
        .await?;

        Ok(batch)
    }

    /// Record the outcome of one attempted payment.
    #[allow(clippy::too_many_arguments)]
    pub async fn record_item(
        &self,
        batch_id: Uuid,
        place: i32,
        player_id: Uuid,
        phone: &str,
        amount: i64,
        status: PayoutItemStatus,
        conversation_id: Option<&str>,
        error_detail: Option<&str>,
    ) -> Result<PayoutItem> {
        let item = sqlx::query_as::<_, PayoutItem>(&format!(
            "INSERT INTO payout_items (batch_id, place, player_id, phone, amount, status, \
             conversation_id, error_detail) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ITEM_COLUMNS}"
        ))
        .bind(batch_id)
        .bind(place)
        .bind(player_id)
        .bind(phone)
        .bind(amount)
        .bind(status)
        .bind(conversation_id)
        .bind(error_detail)
        .fetch_one(self.pool)
        .await?;

        Ok(item)
    }

    pub async fn finalize_counts(
        &self,
        batch_id: Uuid,
        paid_count: i32,
        failed_count: i32,
    ) -> Result<PayoutBatch> {
        sqlx::query_as::<_, PayoutBatch>(&format!(
            "UPDATE payout_batches SET paid_count = $2, failed_count = $3 \
             WHERE batch_id = $1 RETURNING {BATCH_COLUMNS}"
        ))
        .bind(batch_id)
        .bind(paid_count)
        .bind(failed_count)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn find_by_id(&self, batch_id: Uuid) -> Result<(PayoutBatch, Vec<PayoutItem>)> {
        let batch = sqlx::query_as::<_, PayoutBatch>(&format!(
            "SELECT {BATCH_COLUMNS} FROM payout_batches WHERE batch_id = $1"
        ))
        .bind(batch_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        let items = self.items_for(batch_id).await?;

        Ok((batch, items))
    }

    pub async fn list(
        &self,
        tournament_id: Option<Uuid>,
    ) -> Result<Vec<(PayoutBatch, Vec<PayoutItem>)>> {
        let batches = match tournament_id {
            Some(tournament_id) => {
                sqlx::query_as::<_, PayoutBatch>(&format!(
                    "SELECT {BATCH_COLUMNS} FROM payout_batches WHERE tournament_id = $1 \
                     ORDER BY created_at DESC"
                ))
                .bind(tournament_id)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, PayoutBatch>(&format!(
                    "SELECT {BATCH_COLUMNS} FROM payout_batches ORDER BY created_at DESC"
                ))
                .fetch_all(self.pool)
                .await?
            }
        };

        let mut result = Vec::with_capacity(batches.len());
        for batch in batches {
            let items = self.items_for(batch.batch_id).await?;
            result.push((batch, items));
        }

        Ok(result)
    }

    async fn items_for(&self, batch_id: Uuid) -> Result<Vec<PayoutItem>> {
        let items = sqlx::query_as::<_, PayoutItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM payout_items WHERE batch_id = $1 ORDER BY place"
        ))
        .bind(batch_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}
