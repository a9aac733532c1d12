//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use todohub_domain::error::{TodoError, ValidationError};

/// JSON error body returned for server-side failures.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`TodoError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(TodoError);

impl ApiError {
    /// Rejection for an id path segment that is not an integer.
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self(ValidationError::InvalidId { raw: raw.into() }.into())
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            // Plain text body, no JSON wrapper.
            TodoError::Validation(err) => {
                tracing::debug!(error = ?err, "rejecting request");
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            TodoError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
