use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        dispute::DisputeResponse,
        matches::{
            CorrectScoresRequest, DisputeMatchRequest, MatchListQuery, MatchResponse,
            SubmitMatchRequest,
        },
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/matches",
    request_body = SubmitMatchRequest,
    responses(
        (status = 201, description = "Match submitted for review", body = MatchResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Players are identical or unknown")
    ),
    tag = "matches"
)]
pub async fn submit_match(
    State(db): State<Database>,
    Json(req): Json<SubmitMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let submitted = services::submit_match(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(MatchResponse::from(submitted))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches",
    params(MatchListQuery),
    responses(
        (status = 200, description = "List matches successfully", body = Vec<MatchResponse>)
    ),
    tag = "matches"
)]
pub async fn list_matches(
    State(db): State<Database>,
    Query(query): Query<MatchListQuery>,
) -> Result<Response, WebError> {
    let matches = services::list_matches(db.pool(), &query).await?;

    let response: Vec<MatchResponse> = matches.into_iter().map(MatchResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match id")
    ),
    responses(
        (status = 200, description = "Match found", body = MatchResponse),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn get_match(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let m = services::get_match(db.pool(), id).await?;

    Ok(Json(MatchResponse::from(m)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches/{id}/approve",
    params(
        ("id" = Uuid, Path, description = "Match id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Match approved, stats applied to both players", body = MatchResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found"),
        (status = 409, description = "Match is not pending or disputed")
    ),
    tag = "matches"
)]
pub async fn approve_match(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let approved = services::approve_match(db.pool(), id).await?;

    Ok(Json(MatchResponse::from(approved)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Match id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Match rejected", body = MatchResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found"),
        (status = 409, description = "Match is not pending or disputed")
    ),
    tag = "matches"
)]
pub async fn reject_match(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let rejected = services::reject_match(db.pool(), id).await?;

    Ok(Json(MatchResponse::from(rejected)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches/{id}/dispute",
    params(
        ("id" = Uuid, Path, description = "Match id")
    ),
    request_body = DisputeMatchRequest,
    responses(
        (status = 201, description = "Dispute filed", body = DisputeResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Match not found"),
        (status = 409, description = "Match is not pending or reporter not involved")
    ),
    tag = "matches"
)]
pub async fn dispute_match(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<DisputeMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let dispute = services::dispute_match(db.pool(), id, req.reported_by, &req.reason).await?;

    Ok((StatusCode::CREATED, Json(DisputeResponse::from(dispute))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/matches/{id}/scores",
    params(
        ("id" = Uuid, Path, description = "Match id")
    ),
    request_body = CorrectScoresRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Scores corrected, stats recomputed", body = MatchResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found"),
        (status = 409, description = "Match is not approved")
    ),
    tag = "matches"
)]
pub async fn correct_scores(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<CorrectScoresRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let corrected =
        services::correct_scores(db.pool(), id, req.home_score, req.away_score).await?;

    Ok(Json(MatchResponse::from(corrected)).into_response())
}
