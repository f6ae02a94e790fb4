use std::convert::Infallible;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use storage::{
    Database,
    dto::boardroom::{BoardroomMessageResponse, MessageListQuery, PostMessageRequest},
};
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};
use validator::Validate;

use crate::error::WebError;
use crate::state::BoardroomChannel;

use super::services;

#[utoipa::path(
    get,
    path = "/api/boardroom/messages",
    params(MessageListQuery),
    responses(
        (status = 200, description = "Latest messages, newest last", body = Vec<BoardroomMessageResponse>)
    ),
    tag = "boardroom"
)]
pub async fn list_messages(
    State(db): State<Database>,
    Query(query): Query<MessageListQuery>,
) -> Result<Response, WebError> {
    let messages = services::recent_messages(db.pool(), query.limit).await?;

    let response: Vec<BoardroomMessageResponse> = messages
        .into_iter()
        .map(BoardroomMessageResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/boardroom/messages",
    request_body = PostMessageRequest,
    responses(
        (status = 201, description = "Message posted", body = BoardroomMessageResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "boardroom"
)]
pub async fn post_message(
    State(db): State<Database>,
    State(channel): State<BoardroomChannel>,
    Json(req): Json<PostMessageRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let message = services::post_message(db.pool(), &req).await?;
    let response = BoardroomMessageResponse::from(message);

    channel.publish(response.clone());

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Live feed of boardroom messages as server-sent events. Subscribers that
/// fall behind the channel just miss messages and should re-sync via the
/// message list.
#[utoipa::path(
    get,
    path = "/api/boardroom/stream",
    responses(
        (status = 200, description = "SSE stream of new messages")
    ),
    tag = "boardroom"
)]
pub async fn stream_messages(
    State(channel): State<BoardroomChannel>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(channel.subscribe()).filter_map(|message| {
        message.ok().map(|message| {
            let data = serde_json::to_string(&message).unwrap_or_default();
            Ok(Event::default().event("message").data(data))
        })
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
