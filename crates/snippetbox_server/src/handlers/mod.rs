//! HTTP request handlers.

/// Path parameter validation.
pub mod ids;
/// Snippet list/view/create endpoints.
pub mod snippet;

pub use ids::parse_snippet_id;

use crate::error::HttpError;

/// Fallback for unknown paths and unsupported methods on known paths.
pub async fn not_found() -> HttpError {
    HttpError::NotFound
}
