use sqlx::PgPool;
use storage::{
    dto::leaderboard::{LeaderboardEntry, LeaderboardFilter},
    error::Result,
    repository::leaderboard::LeaderboardRepository,
};

/// Ranked players for the given sort key and filters
pub async fn get_leaderboard(
    pool: &PgPool,
    filter: &LeaderboardFilter,
) -> Result<(Vec<LeaderboardEntry>, i64)> {
    let repo = LeaderboardRepository::new(pool);
    repo.get(filter).await
}
