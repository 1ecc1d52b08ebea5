//! Recursive HTML rendering of the navigation tree.
//!
//! Routes render as links with absolute-from-root targets built by joining
//! ancestor path segments. Collections render as a toggle followed by their
//! recursively rendered children; closed children stay in the markup and are
//! hidden with CSS so expanding never refetches anything.

use std::collections::HashSet;
use std::fmt::Write;

use crate::NavEntry;

/// Maximum render depth before a branch is dropped as malformed.
///
/// The navigation source is a finite hand-authored tree, so this cap is never
/// reached in practice; it guards against a future non-tree data source.
pub const MAX_NAV_DEPTH: usize = 32;

/// Caret glyph shown on collection toggles (rotated via CSS when open).
const SVG_CARET: &str = r#"<svg class="nav-caret" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M4.427 6.427a.75.75 0 0 1 1.06 0L8 8.94l2.513-2.513a.75.75 0 1 1 1.06 1.06l-3.043 3.044a.75.75 0 0 1-1.06 0L4.427 7.487a.75.75 0 0 1 0-1.06Z"></path></svg>"#;

/// Open/closed state for collections, keyed by joined tree path.
///
/// Every collection starts closed. The state lives for one page view and is
/// never persisted; in the browser the same transitions are driven by
/// `nav.js` toggling the `open` class.
#[derive(Debug, Default)]
pub struct OpenSet {
    open: HashSet<String>,
}

impl OpenSet {
    /// Create an open-set with every collection closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one collection's state, returning the new state.
    ///
    /// Toggling affects exactly the keyed collection; siblings and nested
    /// collections keep their own state.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.open.remove(key) {
            false
        } else {
            self.open.insert(key.to_owned());
            true
        }
    }

    /// Whether the keyed collection is currently open.
    #[must_use]
    pub fn is_open(&self, key: &str) -> bool {
        self.open.contains(key)
    }
}

/// Build the absolute link target for an entry below the given ancestors.
///
/// Targets are always absolute from the site root: `/seg1/seg2/...`.
#[must_use]
pub fn link_target(ancestors: &[String], path: &str) -> String {
    let mut target = String::with_capacity(path.len() + 1);
    for seg in ancestors {
        target.push('/');
        target.push_str(seg);
    }
    target.push('/');
    target.push_str(path);
    target
}

/// Tree-path key identifying a collection instance in an [`OpenSet`].
fn tree_key(ancestors: &[String], path: &str) -> String {
    let mut key = String::with_capacity(path.len());
    for seg in ancestors {
        key.push_str(seg);
        key.push('/');
    }
    key.push_str(path);
    key
}

/// Render the full navigation tree.
///
/// The top-level list is always expanded and carries no toggle of its own.
/// Collections at any level, including directly at the root, start closed
/// and are gated by their own toggle.
#[must_use]
pub fn render_tree(entries: &[NavEntry], open: &OpenSet) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<nav class="main-navigation">"#);
    let mut ancestors = Vec::new();
    render_list(entries, &mut ancestors, open, true, 0, &mut html);
    html.push_str("</nav>");
    html
}

fn render_list(
    entries: &[NavEntry],
    ancestors: &mut Vec<String>,
    open_set: &OpenSet,
    open: bool,
    depth: usize,
    html: &mut String,
) {
    html.push_str(if open { r#"<ul class="open">"# } else { "<ul>" });
    for entry in entries {
        html.push_str("<li>");
        render_entry(entry, ancestors, open_set, depth, html);
        html.push_str("</li>");
    }
    html.push_str("</ul>");
}

fn render_entry(
    entry: &NavEntry,
    ancestors: &mut Vec<String>,
    open_set: &OpenSet,
    depth: usize,
    html: &mut String,
) {
    if depth >= MAX_NAV_DEPTH {
        tracing::warn!(
            entry = %entry.path(),
            depth,
            "Navigation tree exceeds maximum depth, dropping branch"
        );
        html.push_str(r#"<span class="nav-error">navigation unavailable</span>"#);
        return;
    }

    match entry {
        NavEntry::Route { path, label } => {
            let _ = write!(
                html,
                r#"<a class="btn-link" href="{}">{}</a>"#,
                escape(&link_target(ancestors, path)),
                escape(label),
            );
        }
        NavEntry::Collection {
            path,
            label,
            children,
        } => {
            let key = tree_key(ancestors, path);
            let is_open = open_set.is_open(&key);
            let _ = write!(
                html,
                r#"<button type="button" class="btn-link nav-toggle" data-nav-path="{}" aria-expanded="{is_open}">{}{SVG_CARET}</button>"#,
                escape(&key),
                escape(label),
            );
            ancestors.push(path.clone());
            render_list(children, ancestors, open_set, is_open, depth + 1, html);
            ancestors.pop();
        }
    }
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
