use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::player::{
        CreatePlayerRequest, PlayerDetailResponse, PlayerResponse, RecalculateResponse,
        UpdatePlayerRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/players",
    responses(
        (status = 200, description = "List all players successfully", body = Vec<PlayerResponse>)
    ),
    tag = "players"
)]
pub async fn list_players(State(db): State<Database>) -> Result<Response, WebError> {
    let players = services::list_players(db.pool()).await?;

    let response: Vec<PlayerResponse> = players.into_iter().map(PlayerResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{id}",
    params(
        ("id" = Uuid, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Player found", body = PlayerResponse),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn get_player(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let player = services::get_player(db.pool(), id).await?;

    Ok(Json(PlayerResponse::from(player)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{id}/detailed",
    params(
        ("id" = Uuid, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Player with form, reliability and recent matches", body = PlayerDetailResponse),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn get_player_detailed(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let detail = services::get_player_detailed(db.pool(), id).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    post,
    path = "/api/players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player created successfully", body = PlayerResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Handle already taken")
    ),
    tag = "players"
)]
pub async fn create_player(
    State(db): State<Database>,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let player = services::create_player(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(player))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/players/{id}",
    params(
        ("id" = Uuid, Path, description = "Player id")
    ),
    request_body = UpdatePlayerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Player updated successfully", body = PlayerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn update_player(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdatePlayerRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_player(db.pool(), id, &update_req).await?;

    Ok(Json(PlayerResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    params(
        ("id" = Uuid, Path, description = "Player id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Player deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn delete_player(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_player(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/players/recalculate",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Sweep finished", body = RecalculateResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "players"
)]
pub async fn recalculate_players(State(db): State<Database>) -> Result<Response, WebError> {
    let players_updated = services::recalculate_players(db.pool()).await?;

    Ok(Json(RecalculateResponse { players_updated }).into_response())
}
