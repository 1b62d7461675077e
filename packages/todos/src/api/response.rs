// ABOUTME: Shared API response helpers and error mapping
// ABOUTME: Renders manager errors as status codes with the empty-array body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde_json::{json, Value};

use crate::manager::ManagerError;

/// The empty JSON array used as body for errors and bodiless successes
pub fn empty_body() -> ResponseJson<Value> {
    ResponseJson(json!([]))
}

/// Convert manager errors to HTTP responses
impl IntoResponse for ManagerError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ManagerError::NotFound(_) => StatusCode::NOT_FOUND,
            ManagerError::Validation(_) => StatusCode::BAD_REQUEST,
            ManagerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, empty_body()).into_response()
    }
}
