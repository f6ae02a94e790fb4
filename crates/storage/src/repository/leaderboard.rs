use sqlx::{PgPool, QueryBuilder};

use crate::dto::leaderboard::{LeaderboardEntry, LeaderboardFilter};
use crate::error::Result;

pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, filter: &LeaderboardFilter) -> Result<(Vec<LeaderboardEntry>, i64)> {
        let total_items = self.count_players(filter).await?;
        let entries = self.fetch_ranked(filter).await?;

        Ok((entries, total_items))
    }

    async fn count_players(&self, filter: &LeaderboardFilter) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM players WHERE matches_played >= ");
        query.push_bind(filter.min_matches);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    async fn fetch_ranked(&self, filter: &LeaderboardFilter) -> Result<Vec<LeaderboardEntry>> {
        // The sort column comes from the LeaderboardSort whitelist, never
        // from raw user input.
        let sort_column = filter.sort.as_column();

        let mut query = QueryBuilder::new(format!(
            "SELECT ROW_NUMBER() OVER (ORDER BY {sort_column} DESC, wins DESC, \
             goals_scored DESC, handle ASC) AS rank, \
             player_id, handle, display_name, wins, losses, draws, goals_scored, \
             clean_sheets, matches_played, win_streak, win_rate, consistency_rating \
             FROM players WHERE matches_played >= "
        ));
        query.push_bind(filter.min_matches);

        query.push(" ORDER BY rank LIMIT ");
        query.push_bind(filter.pagination.limit() as i64);
        query.push(" OFFSET ");
        query.push_bind(filter.pagination.offset() as i64);

        let entries = query
            .build_query_as::<LeaderboardEntry>()
            .fetch_all(self.pool)
            .await?;

        Ok(entries)
    }
}
