//! Server-rendered HTML pages.
//!
//! Fallback handler wrapping rendered page content in the site shell.
//! Unknown paths get a styled 404 page rather than a bare error so the
//! navigation stays usable.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use fdocs_site::{PageData, SiteError, render_shell};

use crate::state::AppState;

/// Serve a site page for any non-API, non-asset path.
pub(crate) async fn serve_page(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
) -> Response {
    let path = req.uri().path().trim_matches('/').to_owned();

    match state.site.render_page(&path) {
        Ok(result) => {
            if state.verbose {
                for warning in &result.warnings {
                    tracing::warn!(path = %path, %warning, "Page render warning");
                }
            }
            let html = render_shell(
                &state.chrome,
                &PageData {
                    title: result.title.as_deref(),
                    nav_html: &state.nav_html,
                    content: &result.html,
                },
            );
            Html(html).into_response()
        }
        Err(SiteError::PageNotFound(_)) => not_found(&state, &path),
        Err(err) => {
            tracing::error!(path = %path, error = %err, "Page render failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                "internal error",
            )
                .into_response()
        }
    }
}

/// Render the styled 404 page.
fn not_found(state: &AppState, path: &str) -> Response {
    let content = format!(
        "<h1>Page not found</h1><p>No page exists at <code>/{}</code>.</p>",
        fdocs_render::escape_html(path),
    );
    let html = render_shell(
        &state.chrome,
        &PageData {
            title: Some("Page not found"),
            nav_html: &state.nav_html,
            content: &content,
        },
    );
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdocs_nav::NavSource;
    use fdocs_site::{Site, SiteChrome};
    use std::fs;
    use tempfile::TempDir;

    fn state_with_docs() -> (TempDir, Arc<AppState>) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("intro.md"), "# Intro\n\nHello.\n").unwrap();
        let nav = NavSource::from_json(r#"[{"type":"route","path":"intro","label":"Intro"}]"#)
            .unwrap();
        let site = Site::with_nav(dir.path().to_path_buf(), nav);
        let state = Arc::new(AppState {
            nav_html: fdocs_nav::render_tree(&site.nav().entries, &fdocs_nav::OpenSet::new()),
            site,
            chrome: SiteChrome::default(),
            verbose: false,
            version: "test".to_owned(),
        });
        (dir, state)
    }

    #[tokio::test]
    async fn test_serve_page_wraps_content_in_shell() {
        let (_dir, state) = state_with_docs();
        let req = Request::builder().uri("/intro").body(Body::empty()).unwrap();

        let response = serve_page(State(state), req).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<title>Intro · Documentation</title>"));
        assert!(html.contains("main-navigation"));
        assert!(html.contains("Hello."));
    }

    #[tokio::test]
    async fn test_serve_page_unknown_path_styled_404() {
        let (_dir, state) = state_with_docs();
        let req = Request::builder()
            .uri("/missing/page")
            .body(Body::empty())
            .unwrap();

        let response = serve_page(State(state), req).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Page not found"));
        assert!(html.contains("main-navigation"));
    }
}
