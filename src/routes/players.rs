use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use crate::db;
use crate::error::ApiResult;
use crate::response::Envelope;
use crate::AppState;
use super::parse_id;

const ALL_PLAYERS: Envelope = Envelope::new("players", "No Players found.");
const PLAYER_DETAILS: Envelope = Envelope::new("player", "Player not exist.")
    .legacy_wrapper("result")
    .legacy_missing_status(StatusCode::BAD_REQUEST)
    .normalized_message("Player not found.");
const PLAYERS: Envelope = Envelope::new("players", "No players found.");

// GET /players - List all players
pub async fn get_players(State(state): State<AppState>) -> ApiResult<Response> {
    let players = db::get_all_players(&state.pool).await?;
    ALL_PLAYERS.list(state.style, players)
}

// GET /players/details/:id - Get player by ID
pub async fn get_player_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let player = db::get_player_by_id(&state.pool, parse_id(&id)).await?;
    PLAYER_DETAILS.item(state.style, player)
}

// GET /players/platform/:platform - Players on a platform, case-insensitive
pub async fn get_players_by_platform(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> ApiResult<Response> {
    let players = db::get_players_by_platform(&state.pool, &platform).await?;
    PLAYERS.list(state.style, players)
}

// GET /players/sort-by-rating - Players, highest rating first
pub async fn get_players_sorted_by_rating(State(state): State<AppState>) -> ApiResult<Response> {
    let players = db::get_players_sorted_by_rating(&state.pool).await?;
    PLAYERS.list(state.style, players)
}
