use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::tournament::{
        CreateTournamentRequest, TournamentListQuery, TournamentResponse, UpdateTournamentRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments",
    params(TournamentListQuery),
    responses(
        (status = 200, description = "List tournaments successfully", body = Vec<TournamentResponse>)
    ),
    tag = "tournaments"
)]
pub async fn list_tournaments(
    State(db): State<Database>,
    Query(query): Query<TournamentListQuery>,
) -> Result<Response, WebError> {
    let tournaments = services::list_tournaments(db.pool(), query.status).await?;

    let response: Vec<TournamentResponse> = tournaments
        .into_iter()
        .map(TournamentResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}",
    params(
        ("id" = Uuid, Path, description = "Tournament id")
    ),
    responses(
        (status = 200, description = "Tournament found", body = TournamentResponse),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let tournament = services::get_tournament(db.pool(), id).await?;

    Ok(Json(TournamentResponse::from(tournament)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments",
    request_body = CreateTournamentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Tournament created successfully", body = TournamentResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament(
    State(db): State<Database>,
    Json(req): Json<CreateTournamentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let tournament = services::create_tournament(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TournamentResponse::from(tournament))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/tournaments/{id}",
    params(
        ("id" = Uuid, Path, description = "Tournament id")
    ),
    request_body = UpdateTournamentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Tournament updated successfully", body = TournamentResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn update_tournament(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateTournamentRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_tournament(db.pool(), id, &update_req).await?;

    Ok(Json(TournamentResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournaments/{id}",
    params(
        ("id" = Uuid, Path, description = "Tournament id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Tournament deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn delete_tournament(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_tournament(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
