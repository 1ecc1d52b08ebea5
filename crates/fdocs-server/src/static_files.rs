//! Static asset serving.
//!
//! Serves the embedded frontend assets (stylesheet and navigation script)
//! shared with the static site builder.

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Look up an embedded asset by file name.
pub(crate) fn asset(name: &str) -> Option<&'static str> {
    match name {
        "style.css" => Some(fdocs_site::assets::STYLE_CSS),
        "nav.js" => Some(fdocs_site::assets::NAV_JS),
        _ => None,
    }
}

/// Handle GET /assets/{file}.
pub(crate) async fn serve_asset(Path(file): Path<String>) -> Response {
    match asset(&file) {
        Some(content) => {
            let mime = mime_guess::from_path(&file).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.to_string())],
                content,
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
