//! Presentational widgets: alert boxes, quick-link cards, chapter navigation.
//!
//! Widgets are pure data-to-markup functions with no state; the directive
//! layer wires them to page content.

use std::fmt::Write;

use crate::escape_html;

/// Arrow glyph used by quick-link cards and the chapter navigator.
const SVG_ARROW_RIGHT: &str = r#"<svg class="arrow-glyph" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M8.22 2.97a.75.75 0 0 1 1.06 0l4.25 4.25a.75.75 0 0 1 0 1.06l-4.25 4.25a.75.75 0 0 1-1.06-1.06l2.97-2.97H3.75a.75.75 0 0 1 0-1.5h7.44L8.22 4.03a.75.75 0 0 1 0-1.06Z"></path></svg>"#;
const SVG_ARROW_LEFT: &str = r#"<svg class="arrow-glyph" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M7.78 13.03a.75.75 0 0 1-1.06 0L2.47 8.78a.75.75 0 0 1 0-1.06l4.25-4.25a.75.75 0 0 1 1.06 1.06L4.81 7.5h7.44a.75.75 0 0 1 0 1.5H4.81l2.97 2.97a.75.75 0 0 1 0 1.06Z"></path></svg>"#;

/// Alert severity levels.
///
/// The set is closed; anything outside it renders as an unstyled alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Parse a severity tag, `None` for anything outside the known set.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// CSS class suffix for this severity.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Opening tag for an alert box wrapping arbitrary content.
///
/// An unknown severity gets no modifier class; it must never fail.
#[must_use]
pub fn alert_open(severity: Option<Severity>) -> String {
    match severity {
        Some(s) => format!(r#"<div class="alert alert-{}">"#, s.as_str()),
        None => r#"<div class="alert">"#.to_owned(),
    }
}

/// Closing tag for an alert box.
#[must_use]
pub fn alert_close() -> &'static str {
    "</div>"
}

/// Opening markup for a quick-link card; the body content follows.
#[must_use]
pub fn quicklink_open() -> String {
    r#"<div class="quicklink box">
<div class="quicklink-body text-small">"#
        .to_owned()
}

/// Closing markup for a quick-link card: the labeled link with its arrow.
#[must_use]
pub fn quicklink_close(href: &str, name: &str) -> String {
    format!(
        r#"</div><p class="quicklink-name"><a class="quicklink-link" href="{}">{}{SVG_ARROW_RIGHT}</a></p></div>"#,
        escape_html(href),
        escape_html(name),
    )
}

/// One side of the chapter navigator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigatorLink {
    /// Link target path.
    pub href: String,
    /// Chapter label shown under the direction text.
    pub label: String,
}

/// Render the previous/next chapter navigator.
///
/// A missing side is omitted entirely; its slot stays empty so the present
/// side keeps its alignment.
#[must_use]
pub fn guide_navigator(
    previous: Option<&NavigatorLink>,
    next: Option<&NavigatorLink>,
) -> String {
    let mut html = String::from(r#"<div class="guide-navigator"><div>"#);
    if let Some(prev) = previous {
        let _ = write!(
            html,
            r#"<a class="btn-outlined navigator-prev" href="{}"><span>{SVG_ARROW_LEFT} Previous Chapter</span><span class="text-small">{}</span></a>"#,
            escape_html(&prev.href),
            escape_html(&prev.label),
        );
    }
    html.push_str("</div><div>");
    if let Some(next) = next {
        let _ = write!(
            html,
            r#"<a class="btn-outlined navigator-next" href="{}"><span>Next Chapter {SVG_ARROW_RIGHT}</span><span class="text-small">{}</span></a>"#,
            escape_html(&next.href),
            escape_html(&next.label),
        );
    }
    html.push_str("</div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alert_open_known_severities() {
        assert_eq!(
            alert_open(Severity::parse("info")),
            r#"<div class="alert alert-info">"#
        );
        assert_eq!(
            alert_open(Severity::parse("success")),
            r#"<div class="alert alert-success">"#
        );
        assert_eq!(
            alert_open(Severity::parse("warning")),
            r#"<div class="alert alert-warning">"#
        );
        assert_eq!(
            alert_open(Severity::parse("error")),
            r#"<div class="alert alert-error">"#
        );
    }

    #[test]
    fn test_alert_unknown_severity_renders_unstyled() {
        assert!(Severity::parse("fatal").is_none());
        assert_eq!(alert_open(None), r#"<div class="alert">"#);
    }

    #[test]
    fn test_quicklink_renders_link_and_name() {
        let html = format!("{}{}", quicklink_open(), quicklink_close("/user-manual", "User Manual"));

        assert!(html.contains(r#"href="/user-manual""#));
        assert!(html.contains("User Manual"));
        assert!(html.contains("arrow-glyph"));
        assert!(html.contains(r#"class="quicklink box""#));
    }

    #[test]
    fn test_quicklink_escapes_attributes() {
        let html = quicklink_close("/a\"b", "<Name>");

        assert!(html.contains("/a&quot;b"));
        assert!(html.contains("&lt;Name&gt;"));
    }

    #[test]
    fn test_guide_navigator_next_only() {
        let next = NavigatorLink {
            href: "/guides/setup".to_owned(),
            label: "Setup".to_owned(),
        };

        let html = guide_navigator(None, Some(&next));

        assert!(html.contains("navigator-next"));
        assert!(html.contains(r#"href="/guides/setup""#));
        assert!(html.contains("Next Chapter"));
        // No previous link, no placeholder text for it
        assert!(!html.contains("navigator-prev"));
        assert!(!html.contains("Previous Chapter"));
    }

    #[test]
    fn test_guide_navigator_previous_only() {
        let prev = NavigatorLink {
            href: "/intro".to_owned(),
            label: "Intro".to_owned(),
        };

        let html = guide_navigator(Some(&prev), None);

        assert!(html.contains("navigator-prev"));
        assert!(html.contains("Previous Chapter"));
        assert!(!html.contains("navigator-next"));
    }

    #[test]
    fn test_guide_navigator_both_sides() {
        let prev = NavigatorLink {
            href: "/intro".to_owned(),
            label: "Intro".to_owned(),
        };
        let next = NavigatorLink {
            href: "/setup".to_owned(),
            label: "Setup".to_owned(),
        };

        let html = guide_navigator(Some(&prev), Some(&next));

        assert!(html.contains("navigator-prev"));
        assert!(html.contains("navigator-next"));
    }
}
