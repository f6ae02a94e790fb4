use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{get_dispute, list_disputes, resolve_dispute};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(list_disputes))
        .route("/:id/resolve", post(resolve_dispute))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/:id", get(get_dispute)).merge(protected)
}
