//! Heading capture state for anchor rendering.

use serde::Serialize;

use crate::Slugger;

/// Table of contents entry for an anchored heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Plain heading text.
    pub title: String,
    /// Anchor id.
    pub id: String,
}

/// A finished heading ready to be written to the output.
pub(crate) struct CompletedHeading {
    pub(crate) level: u8,
    /// Anchor id; `None` when the heading carried rich inline markup.
    pub(crate) id: Option<String>,
    pub(crate) html: String,
}

/// Collects heading content during rendering and decides anchor treatment.
///
/// Only headings whose content is plain text get an anchor; anything with
/// nested inline markup (code, emphasis, links, images) renders as a bare
/// heading. That is the documented fallback, not an error.
#[derive(Debug, Default)]
pub(crate) struct HeadingState {
    active: bool,
    level: u8,
    plain: bool,
    text: String,
    html: String,
    title: Option<String>,
    toc: Vec<TocEntry>,
    slugger: Slugger,
}

impl HeadingState {
    pub(crate) fn start(&mut self, level: u8) {
        self.active = true;
        self.level = level;
        self.plain = true;
        self.text.clear();
        self.html.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    /// Record plain text content (feeds the slug and the title).
    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Record rendered HTML content.
    pub(crate) fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    /// Mark the heading as carrying rich inline markup, disabling the anchor.
    pub(crate) fn mark_rich(&mut self) {
        self.plain = false;
    }

    /// Finish the current heading.
    pub(crate) fn complete(&mut self) -> CompletedHeading {
        self.active = false;

        let text = self.text.trim().to_owned();
        if self.level == 1 && self.title.is_none() && !text.is_empty() {
            self.title = Some(text.clone());
        }

        let id = if self.plain && !text.is_empty() {
            let id = self.slugger.slug(&text);
            self.toc.push(TocEntry {
                level: self.level,
                title: text,
                id: id.clone(),
            });
            Some(id)
        } else {
            None
        };

        CompletedHeading {
            level: self.level,
            id,
            html: std::mem::take(&mut self.html),
        }
    }

    /// Title captured from the first H1, if any.
    pub(crate) fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }

    /// Collected table of contents entries.
    pub(crate) fn take_toc(&mut self) -> Vec<TocEntry> {
        std::mem::take(&mut self.toc)
    }
}
