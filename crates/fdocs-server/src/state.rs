//! Application state.
//!
//! Shared state for all request handlers.

use fdocs_site::{Site, SiteChrome};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Loaded documentation site (navigation + page rendering).
    pub(crate) site: Site,
    /// Static chrome configuration for the page shell.
    pub(crate) chrome: SiteChrome,
    /// Pre-rendered navigation sidebar (initial all-closed state).
    pub(crate) nav_html: String,
    /// Enable verbose output (log render warnings).
    pub(crate) verbose: bool,
    /// Application version for ETag generation.
    pub(crate) version: String,
}
