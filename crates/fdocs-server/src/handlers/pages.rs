//! Pages API endpoint.
//!
//! Renders pages to JSON responses with metadata, table of contents and
//! HTML content.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use fdocs_render::TocEntry;
use md5::{Digest, Md5};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::to_url_path;
use crate::state::AppState;

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
struct PageResponse {
    /// Page metadata.
    meta: PageMeta,
    /// Table of contents entries.
    toc: Vec<TocEntry>,
    /// Rendered HTML content.
    content: String,
}

/// Page metadata.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    /// Page title (from the first H1 heading).
    title: Option<String>,
    /// URL path (with leading slash).
    path: String,
    /// Source file path.
    source_file: String,
}

/// Handle GET /api/pages/ (home page).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    get_page_impl(String::new(), &state, &headers)
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    get_page_impl(path, &state, &headers)
}

/// Shared implementation for page rendering.
fn get_page_impl(
    path: String,
    state: &AppState,
    headers: &HeaderMap,
) -> Result<axum::response::Response, ServerError> {
    let result = state.site.render_page(&path)?;

    // Log warnings in verbose mode
    if state.verbose {
        for warning in &result.warnings {
            tracing::warn!(path = %path, %warning, "Page render warning");
        }
    }

    // Conditional request support via ETag
    let etag = compute_etag(&state.version, &result.html);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let response = PageResponse {
        meta: PageMeta {
            title: result.title,
            path: to_url_path(&path),
            source_file: result.source_path.display().to_string(),
        },
        toc: result.toc,
        content: result.html,
    };

    Ok((
        [
            (header::ETAG, etag),
            (
                header::CACHE_CONTROL,
                "private, max-age=60".to_owned(),
            ),
        ],
        Json(response),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 truncated to 64 bits (16 hex chars) - sufficient for cache
/// invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
