mod common;

use axum::http::StatusCode;
use common::{column, get, legacy, normalized};
use serde_json::json;

#[tokio::test]
async fn lists_every_tournament() {
    let (status, body) = get(legacy(common::seeded_pool().await), "/tournaments").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tournaments"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn empty_tournaments_table_is_404_with_message() {
    let (status, body) = get(legacy(common::empty_pool().await), "/tournaments").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No tournaments found." }));
}

#[tokio::test]
async fn tournament_details() {
    let (status, body) = get(legacy(common::seeded_pool().await), "/tournaments/details/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "tournament": { "id": 2, "name": "Summer Major", "gameId": 1, "prizePool": 2000 } })
    );
}

#[tokio::test]
async fn unknown_tournament_is_404() {
    let (status, body) = get(legacy(common::seeded_pool().await), "/tournaments/details/77").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Tournament not found." }));
}

#[tokio::test]
async fn tournaments_for_a_game() {
    let (status, body) = get(legacy(common::seeded_pool().await), "/tournaments/game/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(column(&body["tournaments"], "id"), vec![json!(1), json!(2)]);
}

#[tokio::test]
async fn tournaments_for_non_numeric_game_is_404() {
    let (status, body) = get(legacy(common::seeded_pool().await), "/tournaments/game/chess").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No tournaments found." }));
}

#[tokio::test]
async fn tournaments_for_hex_game_id() {
    let (status, body) = get(legacy(common::seeded_pool().await), "/tournaments/game/0x2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(column(&body["tournaments"], "id"), vec![json!(3)]);
}

#[tokio::test]
async fn sorted_by_prize_pool_descending() {
    let (status, body) =
        get(legacy(common::seeded_pool().await), "/tournaments/sort-by-prize-pool").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        column(&body["tournaments"], "prizePool"),
        vec![json!(2000), json!(500), json!(100)]
    );
}

#[tokio::test]
async fn sorted_by_prize_pool_on_empty_table_is_404() {
    let (status, body) =
        get(legacy(common::empty_pool().await), "/tournaments/sort-by-prize-pool").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No tournaments found." }));
}

#[tokio::test]
async fn normalized_tournament_details_and_miss() {
    let pool = common::seeded_pool().await;
    let (status, body) = get(normalized(pool.clone()), "/tournaments/details/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tournament"]["name"], "Autumn Open");

    let (status, body) = get(normalized(pool), "/tournaments/details/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Tournament not found." }));
}
