use axum::{
    extract::{Path, State},
    response::Response,
};
use crate::db;
use crate::error::ApiResult;
use crate::response::Envelope;
use crate::AppState;
use super::parse_id;

const TOURNAMENTS: Envelope = Envelope::new("tournaments", "No tournaments found.");
const TOURNAMENT_DETAILS: Envelope = Envelope::new("tournament", "Tournament not found.");

// GET /tournaments - List all tournaments
pub async fn get_tournaments(State(state): State<AppState>) -> ApiResult<Response> {
    let tournaments = db::get_all_tournaments(&state.pool).await?;
    TOURNAMENTS.list(state.style, tournaments)
}

// GET /tournaments/details/:id - Get tournament by ID
pub async fn get_tournament_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let tournament = db::get_tournament_by_id(&state.pool, parse_id(&id)).await?;
    TOURNAMENT_DETAILS.item(state.style, tournament)
}

// GET /tournaments/game/:gameId - Tournaments for one game
pub async fn get_tournaments_by_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> ApiResult<Response> {
    let tournaments = db::get_tournaments_by_game(&state.pool, parse_id(&game_id)).await?;
    TOURNAMENTS.list(state.style, tournaments)
}

// GET /tournaments/sort-by-prize-pool - Tournaments, largest prize pool first
pub async fn get_tournaments_sorted_by_prize_pool(
    State(state): State<AppState>,
) -> ApiResult<Response> {
    let tournaments = db::get_tournaments_sorted_by_prize_pool(&state.pool).await?;
    TOURNAMENTS.list(state.style, tournaments)
}
