// ABOUTME: HTTP request handlers for todo operations
// ABOUTME: Handles CRUD operations for todos with database integration

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use tracing::{error, info};

use super::extract::JsonBody;
use super::response::empty_body;
use crate::db::DbState;
use crate::pagination::PageParams;
use crate::types::{TodoCreateInput, TodoUpdateInput};

/// List all todos
pub async fn list_todos(
    State(db): State<DbState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    info!(
        "Listing todos (limit: {:?}, offset: {:?})",
        params.limit, params.offset
    );

    match db.todos.list_todos(params).await {
        Ok(todos) => (StatusCode::OK, ResponseJson(todos)).into_response(),
        Err(e) => {
            error!("Failed to list todos: {}", e);
            e.into_response()
        }
    }
}

/// Get a single todo by ID
pub async fn get_todo(State(db): State<DbState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("Getting todo: {}", id);

    match db.todos.get_todo(id).await {
        Ok(todo) => (StatusCode::OK, ResponseJson(todo)).into_response(),
        Err(e) => {
            error!("Failed to get todo {}: {}", id, e);
            e.into_response()
        }
    }
}

/// Create a new todo
pub async fn create_todo(
    State(db): State<DbState>,
    JsonBody(input): JsonBody<TodoCreateInput>,
) -> impl IntoResponse {
    info!("Creating todo: {}", input.title);

    match db.todos.create_todo(input).await {
        Ok(todo) => (StatusCode::CREATED, ResponseJson(todo)).into_response(),
        Err(e) => {
            error!("Failed to create todo: {}", e);
            e.into_response()
        }
    }
}

/// Update an existing todo
pub async fn update_todo(
    State(db): State<DbState>,
    Path(id): Path<i64>,
    JsonBody(input): JsonBody<TodoUpdateInput>,
) -> impl IntoResponse {
    info!("Updating todo: {}", id);

    match db.todos.update_todo(id, input).await {
        Ok(()) => (StatusCode::OK, empty_body()).into_response(),
        Err(e) => {
            error!("Failed to update todo {}: {}", id, e);
            e.into_response()
        }
    }
}

/// Delete a todo
pub async fn delete_todo(State(db): State<DbState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("Deleting todo: {}", id);

    match db.todos.delete_todo(id).await {
        Ok(()) => (StatusCode::OK, empty_body()).into_response(),
        Err(e) => {
            error!("Failed to delete todo {}: {}", id, e);
            e.into_response()
        }
    }
}
