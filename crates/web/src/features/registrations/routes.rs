use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{
    approve_registration, join_tournament, list_registrations, reject_registration,
    remove_registration,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

/// Routes merged into the tournaments router (`/api/tournaments`).
pub fn tournament_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/registrations", post(join_tournament))
        .route("/:id/registrations", get(list_registrations))
}

/// Admin decisions on individual registrations (`/api/registrations`).
pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    Router::new()
        .route("/:id/approve", post(approve_registration))
        .route("/:id/reject", post(reject_registration))
        .route("/:id/remove", post(remove_registration))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
