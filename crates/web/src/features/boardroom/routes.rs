use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{list_messages, post_message, stream_messages};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(list_messages))
        .route("/messages", post(post_message))
        .route("/stream", get(stream_messages))
}
