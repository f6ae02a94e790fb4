use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::dto::common::PaginationParams;

/// Sortable leaderboard columns. Whitelisted so the ranking query can
/// interpolate the column name safely.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardSort {
    #[default]
    Wins,
    WinRate,
    GoalsScored,
    CleanSheets,
    WinStreak,
}

impl LeaderboardSort {
    pub fn as_column(&self) -> &'static str {
        match self {
            LeaderboardSort::Wins => "wins",
            LeaderboardSort::WinRate => "win_rate",
            LeaderboardSort::GoalsScored => "goals_scored",
            LeaderboardSort::CleanSheets => "clean_sheets",
            LeaderboardSort::WinStreak => "win_streak",
        }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct LeaderboardQuery {
    pub sort: Option<LeaderboardSort>,
    pub min_matches: Option<i32>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct LeaderboardFilter {
    pub sort: LeaderboardSort,
    pub min_matches: i32,
    pub pagination: PaginationParams,
}

impl From<LeaderboardQuery> for LeaderboardFilter {
    fn from(q: LeaderboardQuery) -> Self {
        let mut pagination = PaginationParams::default();
        if let Some(page) = q.page {
            pagination.page = page.max(1);
        }
        if let Some(page_size) = q.page_size {
            pagination.page_size = page_size.clamp(1, 100);
        }

        Self {
            sort: q.sort.unwrap_or_default(),
            min_matches: q.min_matches.unwrap_or(0).max(0),
            pagination,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub player_id: Uuid,
    pub handle: String,
    pub display_name: String,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub goals_scored: i32,
    pub clean_sheets: i32,
    pub matches_played: i32,
    pub win_streak: i32,
    pub win_rate: i32,
    pub consistency_rating: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_are_sane() {
        let f: LeaderboardFilter = LeaderboardQuery {
            sort: None,
            min_matches: None,
            page: None,
            page_size: None,
        }
        .into();

        assert_eq!(f.sort, LeaderboardSort::Wins);
        assert_eq!(f.min_matches, 0);
        assert_eq!(f.pagination.page, 1);
    }

    #[test]
    fn page_size_is_clamped() {
        let f: LeaderboardFilter = LeaderboardQuery {
            sort: Some(LeaderboardSort::WinRate),
            min_matches: Some(-3),
            page: Some(0),
            page_size: Some(10_000),
        }
        .into();

        assert_eq!(f.min_matches, 0);
        assert_eq!(f.pagination.page, 1);
        assert_eq!(f.pagination.page_size, 100);
    }
}
