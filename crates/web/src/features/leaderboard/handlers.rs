use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        leaderboard::{LeaderboardEntry, LeaderboardFilter, LeaderboardQuery},
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Ranked players", body = PaginatedResponse<LeaderboardEntry>)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Response, WebError> {
    let filter = LeaderboardFilter::from(query);

    let (entries, total_items) = services::get_leaderboard(db.pool(), &filter).await?;

    let response = PaginatedResponse::new(
        entries,
        filter.pagination.page,
        filter.pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}
