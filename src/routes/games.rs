use axum::{
    extract::{Path, State},
    response::Response,
};
use crate::db;
use crate::error::ApiResult;
use crate::response::Envelope;
use crate::AppState;
use super::parse_id;

const ALL_GAMES: Envelope = Envelope::new("games", "No game found.");
const GAME_DETAILS: Envelope = Envelope::new("game", "Game not found.");
const GAMES_BY_GENRE: Envelope = Envelope::new("games", "Games not found.").legacy_wrapper("results");
const GAMES: Envelope = Envelope::new("games", "Games not found.");

// GET /games - List all games
pub async fn get_games(State(state): State<AppState>) -> ApiResult<Response> {
    let games = db::get_all_games(&state.pool).await?;
    ALL_GAMES.list(state.style, games)
}

// GET /games/details/:id - Get game by ID
pub async fn get_game_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let game = db::get_game_by_id(&state.pool, parse_id(&id)).await?;
    GAME_DETAILS.item(state.style, game)
}

// GET /games/genre/:genre - Games in a genre, case-insensitive
pub async fn get_games_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> ApiResult<Response> {
    let games = db::get_games_by_genre(&state.pool, &genre).await?;
    GAMES_BY_GENRE.list(state.style, games)
}

// GET /games/platform/:platform - Games on a platform, case-insensitive
pub async fn get_games_by_platform(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> ApiResult<Response> {
    let games = db::get_games_by_platform(&state.pool, &platform).await?;
    GAMES.list(state.style, games)
}

// GET /games/sort-by-rating - Games, highest rating first
pub async fn get_games_sorted_by_rating(State(state): State<AppState>) -> ApiResult<Response> {
    let games = db::get_games_sorted_by_rating(&state.pool).await?;
    GAMES.list(state.style, games)
}
