use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::error;

use tasklist_todos::DbState;

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": unix_timestamp(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "tasklist-cli"
    }))
}

/// Like health, but also reports whether the database answers queries
pub async fn status_check(State(db): State<DbState>) -> impl IntoResponse {
    match db.todos.count_todos().await {
        Ok(count) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "timestamp": unix_timestamp(),
                "version": env!("CARGO_PKG_VERSION"),
                "service": "tasklist-cli",
                "todos": count
            })),
        ),
        Err(e) => {
            error!("Status check failed to reach database: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "degraded",
                    "timestamp": unix_timestamp(),
                    "version": env!("CARGO_PKG_VERSION"),
                    "service": "tasklist-cli"
                })),
            )
        }
    }
}
