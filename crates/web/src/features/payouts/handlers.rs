use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::payout::{CreatePayoutRequest, PayoutBatchResponse, PayoutListQuery},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::PayoutDispatcher;

use super::services;

#[utoipa::path(
    post,
    path = "/api/payouts",
    request_body = CreatePayoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Batch dispatched; per-winner outcomes inside", body = PayoutBatchResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found"),
        (status = 502, description = "Provider authentication failed")
    ),
    tag = "payouts"
)]
pub async fn create_payout(
    State(db): State<Database>,
    State(dispatcher): State<PayoutDispatcher>,
    Json(req): Json<CreatePayoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let batch = services::create_payout(db.pool(), &dispatcher, &req).await?;

    Ok((StatusCode::CREATED, Json(batch)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/payouts",
    params(PayoutListQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Payout batches with their items", body = Vec<PayoutBatchResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "payouts"
)]
pub async fn list_payouts(
    State(db): State<Database>,
    Query(query): Query<PayoutListQuery>,
) -> Result<Response, WebError> {
    let batches = services::list_payouts(db.pool(), query.tournament_id).await?;

    Ok(Json(batches).into_response())
}

#[utoipa::path(
    get,
    path = "/api/payouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Batch id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Batch found", body = PayoutBatchResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Batch not found")
    ),
    tag = "payouts"
)]
pub async fn get_payout(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let batch = services::get_payout(db.pool(), id).await?;

    Ok(Json(batch).into_response())
}
