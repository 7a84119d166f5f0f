use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    NotFound {
        status: StatusCode,
        message: &'static str,
    },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

/// Caller-facing description of a storage failure. The driver's own text
/// never leaves the process.
pub fn storage_fault(err: &sqlx::Error) -> &'static str {
    match err {
        sqlx::Error::Database(_) => "Query failed.",
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) => "Storage unavailable.",
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed => {
            "Database connection unavailable."
        }
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::TypeNotFound { .. } => "Failed to read query result.",
        _ => "Internal storage error.",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { status, message } => {
                (status, Json(MessageResponse { message })).into_response()
            }
            ApiError::Database(err) => {
                tracing::error!("Query failed: {}", err);
                let body = Json(ErrorResponse {
                    error: storage_fault(&err),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
