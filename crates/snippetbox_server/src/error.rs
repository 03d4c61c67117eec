//! HTTP error reporters for snippet handlers.

use crate::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Terminal request failures, rendered as minimal plain-text responses.
///
/// Validation failures are not represented here; they are rendered as a
/// normal page with status 422 by the handlers.
#[derive(Debug)]
pub enum HttpError {
    /// Unknown route, malformed id, or missing snippet.
    NotFound,
    /// Malformed client input, reported with the given status.
    Client(StatusCode),
    /// Store or render failure; detail is logged, never sent to the client.
    Server(AppError),
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self::Server(value)
    }
}

fn status_text(status: StatusCode) -> Response {
    let reason = status.canonical_reason().unwrap_or("Error");
    (status, reason).into_response()
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::NotFound => status_text(StatusCode::NOT_FOUND),
            HttpError::Client(status) => {
                tracing::debug!(status = status.as_u16(), "Rejected client request");
                status_text(status)
            }
            HttpError::Server(err) => {
                tracing::error!(error = ?err, "Request failed: {}", err);
                status_text(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
