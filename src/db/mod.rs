use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::models::Record;

// Requests queue on the one connection rather than failing after sqlx's 30s default.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Pool settings for the single shared handle: one connection, never recycled.
pub fn pool_options() -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(None)
        .max_lifetime(None)
}

/// Open the database read-only. Fails if the file does not exist.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .create_if_missing(false);

    pool_options().connect_with(options).await
}

pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

// Game queries
pub async fn get_all_games(pool: &SqlitePool) -> Result<Vec<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM games"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_game_by_id(pool: &SqlitePool, id: Option<i64>) -> Result<Option<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM games WHERE id = ?"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_games_by_genre(pool: &SqlitePool, genre: &str) -> Result<Vec<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM games WHERE genre = ? COLLATE NOCASE"#
    )
    .bind(genre)
    .fetch_all(pool)
    .await
}

pub async fn get_games_by_platform(pool: &SqlitePool, platform: &str) -> Result<Vec<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM games WHERE platform = ? COLLATE NOCASE"#
    )
    .bind(platform)
    .fetch_all(pool)
    .await
}

pub async fn get_games_sorted_by_rating(pool: &SqlitePool) -> Result<Vec<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM games ORDER BY rating DESC"#
    )
    .fetch_all(pool)
    .await
}

// Player queries
pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM players"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_player_by_id(pool: &SqlitePool, id: Option<i64>) -> Result<Option<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM players WHERE id = ?"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_players_by_platform(pool: &SqlitePool, platform: &str) -> Result<Vec<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM players WHERE platform = ? COLLATE NOCASE"#
    )
    .bind(platform)
    .fetch_all(pool)
    .await
}

pub async fn get_players_sorted_by_rating(pool: &SqlitePool) -> Result<Vec<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM players ORDER BY rating DESC"#
    )
    .fetch_all(pool)
    .await
}

// Tournament queries
pub async fn get_all_tournaments(pool: &SqlitePool) -> Result<Vec<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM tournaments"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_tournament_by_id(pool: &SqlitePool, id: Option<i64>) -> Result<Option<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM tournaments WHERE id = ?"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_tournaments_by_game(pool: &SqlitePool, game_id: Option<i64>) -> Result<Vec<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM tournaments WHERE gameId = ?"#
    )
    .bind(game_id)
    .fetch_all(pool)
    .await
}

pub async fn get_tournaments_sorted_by_prize_pool(pool: &SqlitePool) -> Result<Vec<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"SELECT * FROM tournaments ORDER BY prizePool DESC"#
    )
    .fetch_all(pool)
    .await
}
