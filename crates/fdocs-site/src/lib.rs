//! Site assembly for the fdocs documentation engine.
//!
//! Ties the pieces together: resolves URL paths to Markdown sources,
//! runs the widget and Markdown passes, and wraps rendered content in
//! the site shell (header, navigation sidebar, footer). Used by both
//! the HTTP server and the static site builder.

mod page;
mod shell;

pub use page::{PageRenderResult, Site, SiteError};
pub use shell::{HeaderLink, PageData, SiteChrome, render_shell};

/// Embedded frontend assets, shared by the server and the static builder.
pub mod assets {
    /// Site stylesheet.
    pub const STYLE_CSS: &str = include_str!("../assets/style.css");
    /// Navigation expand/collapse script.
    pub const NAV_JS: &str = include_str!("../assets/nav.js");
}
