use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Dispute, DisputeOutcome};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisputeResponse {
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

impl From<Dispute> for DisputeResponse {
    fn from(d: Dispute) -> Self {
        Self {
            dispute_id: d.dispute_id,
            match_id: d.match_id,
            reported_by: d.reported_by,
            against: d.against,
            reason: d.reason,
            outcome: d.outcome,
            no_show: d.no_show,
            notes: d.notes,
            created_at: d.created_at,
            resolved_at: d.resolved_at,
        }
    }
}

/// Admin ruling on a dispute. Corrected scores are only meaningful when the
/// dispute is upheld; leaving them out throws the submitted result away.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResolveDisputeRequest {
    pub outcome: DisputeOutcome,

    #[validate(range(min = 0, max = 99))]
    pub corrected_home_score: Option<i32>,

    #[validate(range(min = 0, max = 99))]
    pub corrected_away_score: Option<i32>,

    #[serde(default)]
    pub no_show: bool,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DisputeListQuery {
    pub resolved: Option<bool>,
}
