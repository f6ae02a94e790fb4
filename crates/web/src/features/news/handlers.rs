use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::news::{CreateNewsRequest, NewsResponse, UpdateNewsRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/news",
    responses(
        (status = 200, description = "News feed, pinned posts first", body = Vec<NewsResponse>)
    ),
    tag = "news"
)]
pub async fn list_news(State(db): State<Database>) -> Result<Response, WebError> {
    let posts = services::list_news(db.pool()).await?;

    let response: Vec<NewsResponse> = posts.into_iter().map(NewsResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(
        ("id" = Uuid, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post found", body = NewsResponse),
        (status = 404, description = "Post not found")
    ),
    tag = "news"
)]
pub async fn get_news_post(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let post = services::get_news_post(db.pool(), id).await?;

    Ok(Json(NewsResponse::from(post)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/news",
    request_body = CreateNewsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Post created", body = NewsResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "news"
)]
pub async fn create_news_post(
    State(db): State<Database>,
    Json(req): Json<CreateNewsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let post = services::create_news_post(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(NewsResponse::from(post))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    params(
        ("id" = Uuid, Path, description = "Post id")
    ),
    request_body = UpdateNewsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Post updated", body = NewsResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    ),
    tag = "news"
)]
pub async fn update_news_post(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateNewsRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_news_post(db.pool(), id, &update_req).await?;

    Ok(Json(NewsResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    params(
        ("id" = Uuid, Path, description = "Post id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    ),
    tag = "news"
)]
pub async fn delete_news_post(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_news_post(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
