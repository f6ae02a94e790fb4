use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{PayoutBatch, PayoutItem, PayoutItemStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PayoutWinner {
    #[validate(range(min = 1, max = 3))]
    pub place: i32,

    pub player_id: Uuid,

    /// MSISDN in international format, e.g. `2547XXXXXXXX`.
    #[validate(length(min = 10, max = 15))]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePayoutRequest {
    pub tournament_id: Uuid,

    #[validate(range(min = 0))]
    pub total_pool: i64,

    #[validate(length(min = 3, max = 3, message = "Exactly three winners are required"))]
    #[validate(nested)]
    pub winners: Vec<PayoutWinner>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PayoutItemResponse {
    pub item_id: Uuid,
    pub place: i32,
    pub player_id: Uuid,
    pub phone: String,
    pub amount: i64,
    pub status: PayoutItemStatus,
    pub conversation_id: Option<String>,
    pub error_detail: Option<String>,
}

impl From<PayoutItem> for PayoutItemResponse {
    fn from(i: PayoutItem) -> Self {
        Self {
            item_id: i.item_id,
            place: i.place,
            player_id: i.player_id,
            phone: i.phone,
            amount: i.amount,
            status: i.status,
            conversation_id: i.conversation_id,
            error_detail: i.error_detail,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PayoutBatchResponse {
    pub batch_id: Uuid,
    pub tournament_id: Uuid,
    pub total_pool: i64,
    pub first_prize: i64,
    pub second_prize: i64,
    pub third_prize: i64,
    pub arena_fee: i64,
    pub paid_count: i32,
    pub failed_count: i32,
    pub created_at: NaiveDateTime,
    pub items: Vec<PayoutItemResponse>,
}

impl PayoutBatchResponse {
    pub fn from_parts(batch: PayoutBatch, items: Vec<PayoutItem>) -> Self {
        Self {
            batch_id: batch.batch_id,
            tournament_id: batch.tournament_id,
            total_pool: batch.total_pool,
            first_prize: batch.first_prize,
            second_prize: batch.second_prize,
            third_prize: batch.third_prize,
            arena_fee: batch.arena_fee,
            paid_count: batch.paid_count,
            failed_count: batch.failed_count,
            created_at: batch.created_at,
            items: items.into_iter().map(PayoutItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PayoutListQuery {
    pub tournament_id: Option<Uuid>,
}
