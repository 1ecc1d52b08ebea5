//! Navigation tree model and rendering for the fdocs documentation engine.
//!
//! The navigation source is a hand-authored JSON file describing an ordered
//! tree of entries: routes (leaves linking to a page) and collections
//! (branches that group children behind an expand/collapse toggle). The tree
//! is loaded once, never mutated, and walked depth-first into the sidebar
//! markup. The only mutable state is which collections are open, tracked in
//! an [`OpenSet`] keyed by tree path.
//!
//! # Example
//!
//! ```
//! use fdocs_nav::{NavSource, OpenSet, render_tree};
//!
//! let nav = NavSource::from_json(
//!     r#"[{"type":"route","path":"intro","label":"Intro"}]"#,
//! ).unwrap();
//!
//! let html = render_tree(&nav.entries, &OpenSet::new());
//! assert!(html.contains(r#"href="/intro""#));
//! ```

mod entry;
mod render;

pub use entry::{NavEntry, NavSource};
pub use render::{MAX_NAV_DEPTH, OpenSet, link_target, render_tree};

use std::path::PathBuf;

/// Error produced while loading navigation data.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Navigation file could not be read.
    #[error("Failed to read navigation file {}: {source}", .path.display())]
    Io {
        /// Path of the navigation file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Navigation file is not valid JSON.
    #[error("Invalid navigation JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The top-level JSON value is not an array of entries.
    #[error("Navigation source must be a JSON array of entries")]
    NotAnArray,
}
