//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fdocs_site::SiteError;
use serde_json::json;

/// Server error type for JSON API handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Page not found at the given path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Render error from fdocs-site.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<SiteError> for ServerError {
    fn from(e: SiteError) -> Self {
        match e {
            SiteError::PageNotFound(path) => Self::PageNotFound(path),
            other => Self::Render(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": e})),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_not_found_maps_to_404() {
        let response = ServerError::PageNotFound("missing".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_render_error_maps_to_500() {
        let response = ServerError::Render("boom".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
