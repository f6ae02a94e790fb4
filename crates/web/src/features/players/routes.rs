use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_player, delete_player, get_player, get_player_detailed, list_players,
    recalculate_players, update_player,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/recalculate", post(recalculate_players))
        .route("/:id", put(update_player))
        .route("/:id", delete(delete_player))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_players))
        .route("/", post(create_player))
        .route("/:id", get(get_player))
        .route("/:id/detailed", get(get_player_detailed))
        .merge(protected)
}
