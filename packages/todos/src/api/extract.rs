// ABOUTME: Request body extraction for API handlers
// ABOUTME: Maps JSON deserialization failures to 400 responses

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use tracing::error;

use super::response::empty_body;

/// JSON request body that rejects malformed payloads with 400
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                error!("Invalid request body: {}", rejection);
                Err((StatusCode::BAD_REQUEST, empty_body()).into_response())
            }
        }
    }
}
