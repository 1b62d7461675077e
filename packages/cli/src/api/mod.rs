use axum::{routing::get, Router};

use tasklist_todos::api::create_todos_router;
use tasklist_todos::DbState;

pub mod health;

/// Assembles the full application router
pub fn create_router(db: DbState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/status", get(health::status_check))
        .nest("/api/todos", create_todos_router())
        .with_state(db)
}
