use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::NewsPost;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsResponse {
    pub post_id: Uuid,
    pub title: String,
    pub body: String,
    pub author: Option<String>,
    pub pinned: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<NewsPost> for NewsResponse {
    fn from(p: NewsPost) -> Self {
        Self {
            post_id: p.post_id,
            title: p.title,
            body: p.body,
            author: p.author,
            pinned: p.pinned,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNewsRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 10000))]
    pub body: String,

    #[validate(length(max = 100))]
    pub author: Option<String>,

    #[serde(default)]
    pub pinned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNewsRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 10000))]
    pub body: Option<String>,

    #[validate(length(max = 100))]
    pub author: Option<String>,

    pub pinned: Option<bool>,
}
