//! Page resolution and rendering.

use std::path::{Path, PathBuf};

use fdocs_nav::{NavEntry, NavError, NavSource};
use fdocs_render::{MarkdownRenderer, TocEntry, WidgetProcessor};

/// Error returned when page rendering fails.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No Markdown source exists for the requested path.
    #[error("Page not found: /{0}")]
    PageNotFound(String),
    /// I/O error reading a source file.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the source file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Navigation source failed to load.
    #[error(transparent)]
    Nav(#[from] NavError),
}

/// Result of rendering one Markdown page.
#[derive(Clone, Debug)]
pub struct PageRenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Title extracted from the first H1 heading, if any.
    pub title: Option<String>,
    /// Table of contents entries.
    pub toc: Vec<TocEntry>,
    /// Warnings produced by the widget pass.
    pub warnings: Vec<String>,
    /// Source file the page was rendered from.
    pub source_path: PathBuf,
}

/// A loaded documentation site: source directory plus navigation tree.
///
/// The navigation tree is loaded once when the site is opened and treated
/// as immutable afterwards; pages are read and rendered on demand.
pub struct Site {
    source_dir: PathBuf,
    nav: NavSource,
}

impl Site {
    /// Open a site rooted at `source_dir` with its navigation file.
    pub fn open(source_dir: PathBuf, nav_file: &Path) -> Result<Self, SiteError> {
        let nav = NavSource::load(nav_file)?;
        Ok(Self { source_dir, nav })
    }

    /// Create a site from an already-loaded navigation tree.
    #[must_use]
    pub fn with_nav(source_dir: PathBuf, nav: NavSource) -> Self {
        Self { source_dir, nav }
    }

    /// The loaded navigation tree.
    #[must_use]
    pub fn nav(&self) -> &NavSource {
        &self.nav
    }

    /// Render the page at a URL path (without leading slash, "" for home).
    pub fn render_page(&self, path: &str) -> Result<PageRenderResult, SiteError> {
        let source_path = self
            .resolve_source(path)
            .ok_or_else(|| SiteError::PageNotFound(path.to_owned()))?;
        let markdown = std::fs::read_to_string(&source_path).map_err(|source| SiteError::Io {
            path: source_path.clone(),
            source,
        })?;

        let mut widgets = WidgetProcessor::new();
        let processed = widgets.process(&markdown);
        let result = MarkdownRenderer::new().render_markdown(&processed);

        for warning in widgets.warnings() {
            tracing::warn!(page = %path, %warning, "Page render warning");
        }

        Ok(PageRenderResult {
            html: result.html,
            title: result.title,
            toc: result.toc,
            warnings: widgets.warnings().to_vec(),
            source_path,
        })
    }

    /// All route link targets in navigation order, without leading slash.
    ///
    /// Used by the static builder to decide which pages to export.
    #[must_use]
    pub fn route_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_routes(&self.nav.entries, &mut Vec::new(), &mut paths);
        paths
    }

    /// Map a URL path to its Markdown source file.
    ///
    /// `""` resolves to `index.md`; `a/b` resolves to `a/b.md`, falling back
    /// to `a/b/index.md`. Paths escaping the source directory are rejected.
    fn resolve_source(&self, path: &str) -> Option<PathBuf> {
        if path.is_empty() {
            let index = self.source_dir.join("index.md");
            return index.is_file().then_some(index);
        }

        // The path comes straight from a URL; keep it inside the source dir
        if path
            .split('/')
            .any(|seg| seg.is_empty() || seg == "." || seg == ".." || seg.contains('\\'))
        {
            return None;
        }

        let file = self.source_dir.join(format!("{path}.md"));
        if file.is_file() {
            return Some(file);
        }
        let index = self.source_dir.join(path).join("index.md");
        index.is_file().then_some(index)
    }
}

/// Depth-first collection of route targets.
fn collect_routes(entries: &[NavEntry], ancestors: &mut Vec<String>, out: &mut Vec<String>) {
    for entry in entries {
        match entry {
            NavEntry::Route { path, .. } => {
                let mut target = ancestors.join("/");
                if !target.is_empty() {
                    target.push('/');
                }
                target.push_str(path);
                out.push(target);
            }
            NavEntry::Collection { path, children, .. } => {
                ancestors.push(path.clone());
                collect_routes(children, ancestors, out);
                ancestors.pop();
            }
        }
    }
}
