use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use payments::{DarajaClient, DarajaSettings};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::auth::ApiKeys;
use state::{AppState, BoardroomChannel, PayoutDispatcher};

#[derive(OpenApi)]
#[openapi(
    paths(
        features::players::handlers::list_players,
        features::players::handlers::get_player,
        features::players::handlers::get_player_detailed,
        features::players::handlers::create_player,
        features::players::handlers::update_player,
        features::players::handlers::delete_player,
        features::players::handlers::recalculate_players,
        features::tournaments::handlers::list_tournaments,
        features::tournaments::handlers::get_tournament,
        features::tournaments::handlers::create_tournament,
        features::tournaments::handlers::update_tournament,
        features::tournaments::handlers::delete_tournament,
        features::registrations::handlers::join_tournament,
        features::registrations::handlers::list_registrations,
        features::registrations::handlers::approve_registration,
        features::registrations::handlers::reject_registration,
        features::registrations::handlers::remove_registration,
        features::matches::handlers::submit_match,
        features::matches::handlers::list_matches,
        features::matches::handlers::get_match,
        features::matches::handlers::approve_match,
        features::matches::handlers::reject_match,
        features::matches::handlers::dispute_match,
        features::matches::handlers::correct_scores,
        features::disputes::handlers::list_disputes,
        features::disputes::handlers::get_dispute,
        features::disputes::handlers::resolve_dispute,
        features::leaderboard::handlers::get_leaderboard,
        features::news::handlers::list_news,
        features::news::handlers::get_news_post,
        features::news::handlers::create_news_post,
        features::news::handlers::update_news_post,
        features::news::handlers::delete_news_post,
        features::boardroom::handlers::list_messages,
        features::boardroom::handlers::post_message,
        features::boardroom::handlers::stream_messages,
        features::payouts::handlers::create_payout,
        features::payouts::handlers::list_payouts,
        features::payouts::handlers::get_payout,
    ),
    components(
        schemas(
            storage::dto::player::PlayerResponse,
            storage::dto::player::PlayerDetailResponse,
            storage::dto::player::FormSummary,
            storage::dto::player::ReliabilitySummary,
            storage::dto::player::CreatePlayerRequest,
            storage::dto::player::UpdatePlayerRequest,
            storage::dto::player::RecalculateResponse,
            storage::dto::matches::MatchResponse,
            storage::dto::matches::SubmitMatchRequest,
            storage::dto::matches::DisputeMatchRequest,
            storage::dto::matches::CorrectScoresRequest,
            storage::dto::tournament::TournamentResponse,
            storage::dto::tournament::CreateTournamentRequest,
            storage::dto::tournament::UpdateTournamentRequest,
            storage::dto::registration::RegistrationResponse,
            storage::dto::registration::JoinTournamentRequest,
            storage::dto::dispute::DisputeResponse,
            storage::dto::dispute::ResolveDisputeRequest,
            storage::dto::news::NewsResponse,
            storage::dto::news::CreateNewsRequest,
            storage::dto::news::UpdateNewsRequest,
            storage::dto::boardroom::BoardroomMessageResponse,
            storage::dto::boardroom::PostMessageRequest,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::leaderboard::LeaderboardSort,
            storage::dto::payout::PayoutWinner,
            storage::dto::payout::CreatePayoutRequest,
            storage::dto::payout::PayoutItemResponse,
            storage::dto::payout::PayoutBatchResponse,
            storage::dto::common::PaginationMeta,
            storage::models::MatchStatus,
            storage::models::MatchOutcome,
            storage::models::TournamentStatus,
            storage::models::RegistrationStatus,
            storage::models::DisputeOutcome,
            storage::models::PayoutItemStatus,
        )
    ),
    tags(
        (name = "players", description = "Player profiles and statistics"),
        (name = "tournaments", description = "Tournament management"),
        (name = "registrations", description = "Tournament registration workflow"),
        (name = "matches", description = "Match submission and lifecycle"),
        (name = "disputes", description = "Dispute filing and resolution"),
        (name = "leaderboard", description = "Ranked player standings"),
        (name = "news", description = "Community news feed"),
        (name = "boardroom", description = "Community chat"),
        (name = "payouts", description = "Prize splits and M-Pesa payouts"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting PES Arena API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let daraja = DarajaClient::new(DarajaSettings {
        base_url: config.mpesa.base_url.clone(),
        consumer_key: config.mpesa.consumer_key.clone(),
        consumer_secret: config.mpesa.consumer_secret.clone(),
        shortcode: config.mpesa.shortcode.clone(),
        initiator_name: config.mpesa.initiator_name.clone(),
        security_credential: config.mpesa.security_credential.clone(),
        result_url: config.mpesa.result_url.clone(),
        timeout_url: config.mpesa.timeout_url.clone(),
    })
    .context("Failed to build M-Pesa client")?;

    let state = AppState {
        db,
        api_keys: api_keys.clone(),
        boardroom: BoardroomChannel::new(256),
        payouts: PayoutDispatcher {
            client: Arc::new(daraja),
            delay: Duration::from_millis(config.payout_delay_ms),
        },
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .nest("/api/players", features::players::routes(api_keys.clone()))
        .nest(
            "/api/tournaments",
            features::tournaments::routes(api_keys.clone())
                .merge(features::registrations::tournament_routes()),
        )
        .nest(
            "/api/registrations",
            features::registrations::routes(api_keys.clone()),
        )
        .nest("/api/matches", features::matches::routes(api_keys.clone()))
        .nest("/api/disputes", features::disputes::routes(api_keys.clone()))
        .nest("/api/leaderboard", features::leaderboard::routes())
        .nest("/api/news", features::news::routes(api_keys.clone()))
        .nest("/api/boardroom", features::boardroom::routes())
        .nest("/api/payouts", features::payouts::routes(api_keys))
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
