use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// How an admin ruled on a dispute: `Upheld` sides with the reporter,
/// `Overturned` lets the submitted result stand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "dispute_outcome", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DisputeOutcome {
    Upheld,
    Overturned,
}

impl std::fmt::Display for DisputeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisputeOutcome::Upheld => write!(f, "upheld"),
            DisputeOutcome::Overturned => write!(f, "overturned"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Dispute {
    pub dispute_id: Uuid,
    pub match_id: Uuid,
    pub reported_by: Uuid,
    pub against: Uuid,
    pub reason: String,
    pub outcome: Option<DisputeOutcome>,
    pub no_show: bool,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
}

impl Dispute {
    pub fn is_resolved(&self) -> bool {
        self.resolved_at.is_some()
    }
}
