//! Heading slugs.

use std::collections::HashMap;

/// Derives URL-safe anchor ids from heading text.
///
/// Ids are unique within one slugger instance; use one instance per page
/// render so anchors never collide on a page but are free to repeat across
/// pages. Repeated headings get a numeric suffix: the second "Install"
/// becomes `install-1`.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    /// Create a slugger with an empty seen-set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the anchor id for a heading, disambiguating duplicates.
    ///
    /// Deterministic: the same text against the same prior sequence always
    /// produces the same id.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base.clone()
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        slug
    }
}

/// Lowercase, collapse non-alphanumeric runs to single hyphens, trim.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }
    // Headings whose text reduces to nothing still need a non-empty id
    if slug.is_empty() {
        "section".to_owned()
    } else {
        slug
    }
}
