use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{create_payout, get_payout, list_payouts};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    Router::new()
        .route("/", post(create_payout))
        .route("/", get(list_payouts))
        .route("/:id", get(get_payout))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
