use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::db::DbState;

pub mod extract;
pub mod handlers;
pub mod response;

/// Creates the todos API router
pub fn create_todos_router() -> Router<DbState> {
    Router::new()
        .route("/", get(handlers::list_todos))
        .route("/", post(handlers::create_todo))
        .route("/{id}", get(handlers::get_todo))
        .route("/{id}", put(handlers::update_todo))
        .route("/{id}", delete(handlers::delete_todo))
}
