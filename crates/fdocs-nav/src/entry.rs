//! Navigation entry model and lenient JSON loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::NavError;

/// One node in the navigation tree.
///
/// The JSON wire shape is the contract navigation authors write against:
/// `type` discriminates the variant, `path` is a single URL segment and
/// `label` the display text. Collections additionally carry ordered
/// `children`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavEntry {
    /// Leaf entry linking directly to a page.
    Route {
        /// URL path segment (never contains `/`).
        path: String,
        /// Display text.
        label: String,
    },
    /// Branch entry grouping child entries behind a toggle.
    Collection {
        /// URL path segment (never contains `/`).
        path: String,
        /// Display text shown on the toggle.
        label: String,
        /// Child entries in display order.
        children: Vec<NavEntry>,
    },
}

impl NavEntry {
    /// URL path segment of this entry.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Route { path, .. } | Self::Collection { path, .. } => path,
        }
    }

    /// Display label of this entry.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Route { label, .. } | Self::Collection { label, .. } => label,
        }
    }
}

/// A loaded navigation tree plus any warnings produced while loading it.
#[derive(Debug, Default)]
pub struct NavSource {
    /// Top-level entries in display order.
    pub entries: Vec<NavEntry>,
    /// Descriptions of entries that were dropped and why.
    pub warnings: Vec<String>,
}

impl NavSource {
    /// Load a navigation tree from a JSON file.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let json = std::fs::read_to_string(path).map_err(|source| NavError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse a navigation tree from a JSON string.
    ///
    /// Parsing is lenient: an entry with an unknown `type`, an invalid
    /// `path`, or a missing `label` is dropped with a warning instead of
    /// failing the whole tree. Valid siblings and subtrees are unaffected.
    pub fn from_json(json: &str) -> Result<Self, NavError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(items) = value else {
            return Err(NavError::NotAnArray);
        };

        let mut warnings = Vec::new();
        let entries = parse_entries(&items, "", &mut warnings);
        for warning in &warnings {
            tracing::warn!(%warning, "Dropped navigation entry");
        }

        Ok(Self { entries, warnings })
    }
}

/// Parse a JSON array of entries, skipping invalid elements individually.
fn parse_entries(items: &[Value], at: &str, warnings: &mut Vec<String>) -> Vec<NavEntry> {
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| parse_entry(item, &format!("{at}[{i}]"), warnings))
        .collect()
}

/// Parse a single entry, returning `None` (with a warning) when malformed.
fn parse_entry(value: &Value, at: &str, warnings: &mut Vec<String>) -> Option<NavEntry> {
    let Some(obj) = value.as_object() else {
        warnings.push(format!("{at}: entry is not an object"));
        return None;
    };

    let kind = obj.get("type").and_then(Value::as_str).unwrap_or("");
    let path = obj.get("path").and_then(Value::as_str).unwrap_or("");
    let label = obj.get("label").and_then(Value::as_str).unwrap_or("");

    if path.is_empty() {
        warnings.push(format!("{at}: missing or empty \"path\""));
        return None;
    }
    if path.contains('/') {
        warnings.push(format!(
            "{at}: \"path\" must be a single segment, got \"{path}\""
        ));
        return None;
    }
    if label.is_empty() {
        warnings.push(format!("{at}: missing or empty \"label\""));
        return None;
    }

    match kind {
        "route" => Some(NavEntry::Route {
            path: path.to_owned(),
            label: label.to_owned(),
        }),
        "collection" => {
            let children = match obj.get("children").and_then(Value::as_array) {
                Some(items) => parse_entries(items, &format!("{at}.children"), warnings),
                None => Vec::new(),
            };
            Some(NavEntry::Collection {
                path: path.to_owned(),
                label: label.to_owned(),
                children,
            })
        }
        other => {
            warnings.push(format!("{at}: unknown entry type \"{other}\""));
            None
        }
    }
}
