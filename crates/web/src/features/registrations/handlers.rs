use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::registration::{JoinTournamentRequest, RegistrationListQuery, RegistrationResponse},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/tournaments/{id}/registrations",
    params(
        ("id" = Uuid, Path, description = "Tournament id")
    ),
    request_body = JoinTournamentRequest,
    responses(
        (status = 201, description = "Registration requested", body = RegistrationResponse),
        (status = 404, description = "Tournament not found"),
        (status = 409, description = "Closed, full or already requested")
    ),
    tag = "registrations"
)]
pub async fn join_tournament(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<JoinTournamentRequest>,
) -> Result<Response, WebError> {
    let registration = services::join_tournament(db.pool(), id, req.player_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::from(registration)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}/registrations",
    params(
        ("id" = Uuid, Path, description = "Tournament id"),
        RegistrationListQuery
    ),
    responses(
        (status = 200, description = "Registrations for the tournament", body = Vec<RegistrationResponse>)
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Query(query): Query<RegistrationListQuery>,
) -> Result<Response, WebError> {
    let registrations = services::list_registrations(db.pool(), id, query.status).await?;

    let response: Vec<RegistrationResponse> = registrations
        .into_iter()
        .map(RegistrationResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/{id}/approve",
    params(
        ("id" = Uuid, Path, description = "Registration id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Registration approved", body = RegistrationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Registration not found"),
        (status = 409, description = "Registration is not pending")
    ),
    tag = "registrations"
)]
pub async fn approve_registration(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let registration = services::approve_registration(db.pool(), id).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Registration id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Registration rejected", body = RegistrationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Registration not found"),
        (status = 409, description = "Registration is not pending")
    ),
    tag = "registrations"
)]
pub async fn reject_registration(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let registration = services::reject_registration(db.pool(), id).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/{id}/remove",
    params(
        ("id" = Uuid, Path, description = "Registration id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Player removed from the tournament", body = RegistrationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Registration not found"),
        (status = 409, description = "Registration is not approved")
    ),
    tag = "registrations"
)]
pub async fn remove_registration(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let registration = services::remove_registration(db.pool(), id).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}
