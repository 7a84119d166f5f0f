use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePool;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod response;
pub mod routes;

use config::{Config, ConfigError, ResponseStyle};

/// Shared by every handler. Built only after the database is open.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub style: ResponseStyle,
}

impl AppState {
    pub fn new(pool: SqlitePool, style: ResponseStyle) -> Self {
        AppState { pool, style }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(routes::root))
        .route("/health", get(routes::health::health_check))

        // Game endpoints
        .route("/games", get(routes::games::get_games))
        .route("/games/details/{id}", get(routes::games::get_game_by_id))
        .route("/games/genre/{genre}", get(routes::games::get_games_by_genre))
        .route("/games/platform/{platform}", get(routes::games::get_games_by_platform))
        .route("/games/sort-by-rating", get(routes::games::get_games_sorted_by_rating))

        // Player endpoints
        .route("/players", get(routes::players::get_players))
        .route("/players/details/{id}", get(routes::players::get_player_by_id))
        .route("/players/platform/{platform}", get(routes::players::get_players_by_platform))
        .route("/players/sort-by-rating", get(routes::players::get_players_sorted_by_rating))

        // Tournament endpoints
        .route("/tournaments", get(routes::tournaments::get_tournaments))
        .route("/tournaments/details/{id}", get(routes::tournaments::get_tournament_by_id))
        .route("/tournaments/game/{game_id}", get(routes::tournaments::get_tournaments_by_game))
        .route("/tournaments/sort-by-prize-pool", get(routes::tournaments::get_tournaments_sorted_by_prize_pool))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the database, then serve until a shutdown signal arrives.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let pool = db::connect(&config.database_url).await?;
    tracing::info!("Database connection established: {}", config.database_url);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Server listening on http://{} ({:?} responses)",
        addr,
        config.response_style
    );

    let app = app(AppState::new(pool.clone(), config.response_style));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Database connection closed.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining requests...");
}
