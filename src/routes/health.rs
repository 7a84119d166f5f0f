use axum::{extract::State, http::StatusCode, response::Json};
use crate::db;
use crate::models::HealthResponse;
use crate::AppState;

// GET /health - Liveness plus a round trip to the database
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status) = match db::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let response = HealthResponse {
        status,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (code, Json(response))
}
