use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{
    approve_match, correct_scores, dispute_match, get_match, list_matches, reject_match,
    submit_match,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/:id/approve", post(approve_match))
        .route("/:id/reject", post(reject_match))
        .route("/:id/scores", put(correct_scores))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", post(submit_match))
        .route("/", get(list_matches))
        .route("/:id", get(get_match))
        .route("/:id/dispute", post(dispute_match))
        .merge(protected)
}
