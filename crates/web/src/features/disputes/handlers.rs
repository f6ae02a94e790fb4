use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::dispute::{DisputeListQuery, DisputeResponse, ResolveDisputeRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/disputes",
    params(DisputeListQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List disputes successfully", body = Vec<DisputeResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "disputes"
)]
pub async fn list_disputes(
    State(db): State<Database>,
    Query(query): Query<DisputeListQuery>,
) -> Result<Response, WebError> {
    let disputes = services::list_disputes(db.pool(), query.resolved).await?;

    let response: Vec<DisputeResponse> = disputes.into_iter().map(DisputeResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/disputes/{id}",
    params(
        ("id" = Uuid, Path, description = "Dispute id")
    ),
    responses(
        (status = 200, description = "Dispute found", body = DisputeResponse),
        (status = 404, description = "Dispute not found")
    ),
    tag = "disputes"
)]
pub async fn get_dispute(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let dispute = services::get_dispute(db.pool(), id).await?;

    Ok(Json(DisputeResponse::from(dispute)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/disputes/{id}/resolve",
    params(
        ("id" = Uuid, Path, description = "Dispute id")
    ),
    request_body = ResolveDisputeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Dispute resolved", body = DisputeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Dispute not found"),
        (status = 409, description = "Dispute already resolved")
    ),
    tag = "disputes"
)]
pub async fn resolve_dispute(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<ResolveDisputeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let resolved = services::resolve_dispute(db.pool(), id, &req).await?;

    Ok(Json(DisputeResponse::from(resolved)).into_response())
}
