use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payout_item_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PayoutItemStatus {
    Paid,
    Failed,
}

impl std::fmt::Display for PayoutItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayoutItemStatus::Paid => write!(f, "paid"),
            PayoutItemStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One prize-distribution run for a tournament. Amounts are whole KES and
/// always satisfy `first + second + third + arena_fee == total_pool`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PayoutBatch {
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
}

/// One attempted B2C payment. Failures are recorded, never rolled back.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PayoutItem {
    pub item_id: Uuid,
    pub batch_id: Uuid,
    pub place: i32,
    pub player_id: Uuid,
    pub phone: String,
    pub amount: i64,
    pub status: PayoutItemStatus,
    pub conversation_id: Option<String>,
    pub error_detail: Option<String>,
    pub created_at: NaiveDateTime,
}
