#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use gaming_platform_api::{app, config::ResponseStyle, db, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePool;
use tower::ServiceExt;

const SCHEMA: &[&str] = &[
    "CREATE TABLE games (id INTEGER PRIMARY KEY, genre TEXT, platform TEXT, rating REAL)",
    "CREATE TABLE players (id INTEGER PRIMARY KEY, name TEXT, platform TEXT, rating REAL)",
    "CREATE TABLE tournaments (id INTEGER PRIMARY KEY, name TEXT, gameId INTEGER, prizePool INTEGER)",
];

const SEED: &[&str] = &[
    "INSERT INTO games VALUES
        (1, 'FPS', 'PC', 4.5),
        (2, 'RPG', 'PlayStation', 4.8),
        (3, 'fps', 'Xbox', 3.9),
        (4, 'Strategy', 'pc', 4.1)",
    "INSERT INTO players VALUES
        (1, 'Alice', 'PC', 4.2),
        (2, 'Bob', 'Xbox', 4.9),
        (3, 'Cara', 'pc', 3.5)",
    "INSERT INTO tournaments VALUES
        (1, 'Spring Cup', 1, 500),
        (2, 'Summer Major', 1, 2000),
        (3, 'Autumn Open', 2, 100)",
];

/// In-memory database with no tables at all.
pub async fn bare_pool() -> SqlitePool {
    db::pool_options()
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database")
}

/// Tables exist but hold no rows.
pub async fn empty_pool() -> SqlitePool {
    let pool = bare_pool().await;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&pool).await.unwrap();
    }
    pool
}

pub async fn seeded_pool() -> SqlitePool {
    let pool = empty_pool().await;
    for statement in SEED {
        sqlx::query(statement).execute(&pool).await.unwrap();
    }
    pool
}

pub fn legacy(pool: SqlitePool) -> Router {
    app(AppState::new(pool, ResponseStyle::Legacy))
}

pub fn normalized(pool: SqlitePool) -> Router {
    app(AppState::new(pool, ResponseStyle::Normalized))
}

pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    let json = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("{uri} returned non-JSON body {body:?}: {e}"));
    (status, json)
}

/// Values of `column` across a JSON array of rows.
pub fn column(rows: &Value, column: &str) -> Vec<Value> {
    rows.as_array()
        .expect("array of rows")
        .iter()
        .map(|row| row[column].clone())
        .collect()
}
