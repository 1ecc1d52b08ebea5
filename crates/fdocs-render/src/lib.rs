//! Markdown rendering for the fdocs documentation engine.
//!
//! Pages are Markdown compiled by `pulldown-cmark`; this crate turns the
//! event stream into the site's HTML dialect:
//!
//! - headings with plain-text content become deep-linkable anchors with
//!   page-unique slugs (see [`Slugger`]); headings carrying rich inline
//!   markup render without an anchor
//! - content widgets (alert boxes, quick-link cards, the chapter
//!   navigator) are referenced with a directive syntax handled by
//!   [`WidgetProcessor`] before the Markdown pass
//!
//! # Example
//!
//! ```
//! use fdocs_render::MarkdownRenderer;
//!
//! let result = MarkdownRenderer::new().render_markdown("## Install");
//! assert!(result.html.contains(r##"<h2 id="install""##));
//! assert_eq!(result.toc[0].id, "install");
//! ```

mod directive;
mod heading;
mod html;
mod renderer;
mod slug;
pub mod widgets;

pub use directive::{DirectiveArgs, WidgetProcessor};
pub use heading::TocEntry;
pub use html::escape_html;
pub use renderer::{MarkdownRenderer, RenderResult};
pub use slug::Slugger;
