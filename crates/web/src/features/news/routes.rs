use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_news_post, delete_news_post, get_news_post, list_news, update_news_post,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_news_post))
        .route("/:id", put(update_news_post))
        .route("/:id", delete(delete_news_post))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_news))
        .route("/:id", get(get_news_post))
        .merge(protected)
}
