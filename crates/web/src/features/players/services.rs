use sqlx::PgPool;
use storage::{
    dto::{
        matches::MatchResponse,
        player::{
            CreatePlayerRequest, FormSummary, PlayerDetailResponse, ReliabilitySummary,
            UpdatePlayerRequest,
        },
    },
    error::Result,
    models::Player,
    repository::{matches::MatchRepository, player::PlayerRepository},
    services::{form, match_flow, reliability},
};
use uuid::Uuid;

const RECENT_MATCHES: i64 = 10;

/// List all players
pub async fn list_players(pool: &PgPool) -> Result<Vec<Player>> {
    let repo = PlayerRepository::new(pool);
    repo.list().await
}

/// Get player by id
pub async fn get_player(pool: &PgPool, id: Uuid) -> Result<Player> {
    let repo = PlayerRepository::new(pool);
    repo.find_by_id(id).await
}

/// Get player with current form, reliability and recent matches
pub async fn get_player_detailed(pool: &PgPool, id: Uuid) -> Result<PlayerDetailResponse> {
    let repo = PlayerRepository::new(pool);
    let player = repo.find_by_id(id).await?;

    let outcomes = match_flow::recent_form(pool, id, form::FORM_WINDOW).await?;
    let rating = form::consistency(&outcomes);
    let attendance = reliability::reliability(player.matches_played, player.no_shows);

    let recent = MatchRepository::new(pool)
        .recent_for_player(id, RECENT_MATCHES)
        .await?;

    Ok(PlayerDetailResponse {
        player: player.into(),
        form: FormSummary {
            score: rating.score,
            label: rating.label.to_string(),
            last_results: outcomes.iter().map(|o| o.letter().to_string()).collect(),
        },
        reliability: ReliabilitySummary {
            score: attendance.score,
            risk: attendance.risk.to_string(),
        },
        recent_matches: recent.into_iter().map(MatchResponse::from).collect(),
    })
}

/// Create a new player profile
pub async fn create_player(pool: &PgPool, request: &CreatePlayerRequest) -> Result<Player> {
    let repo = PlayerRepository::new(pool);
    repo.create(request).await
}

/// Update a player profile
pub async fn update_player(
    pool: &PgPool,
    id: Uuid,
    request: &UpdatePlayerRequest,
) -> Result<Player> {
    let repo = PlayerRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Delete a player
pub async fn delete_player(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = PlayerRepository::new(pool);
    repo.delete(id).await
}

/// Recompute every player's stats from approved match history
pub async fn recalculate_players(pool: &PgPool) -> Result<u64> {
    match_flow::recalculate_all(pool).await
}
