//! Widget directives in page content.
//!
//! Pages reference widgets with a directive syntax preprocessed to raw HTML
//! before the Markdown pass (HTML blocks pass through `pulldown-cmark`
//! untouched, so widget bodies are still rendered as Markdown):
//!
//! - `:::alert{severity="info"}` … `:::` — alert box around content
//! - `:::quicklink{href="/x" name="User Manual"}` … `:::` — quick-link card
//! - `::guide-nav{next-href="/guides/setup" next-label="Setup"}` — chapter
//!   navigator (either side optional)
//!
//! Unknown directive names pass through untouched so text that merely looks
//! like a directive is not eaten. Malformed directives degrade with a
//! recorded warning; they never fail the page.

use std::collections::HashMap;

use crate::widgets::{
    NavigatorLink, Severity, alert_close, alert_open, guide_navigator, quicklink_close,
    quicklink_open,
};

/// Parsed `{key="value" ...}` attributes from a directive line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    attrs: HashMap<String, String>,
}

impl DirectiveArgs {
    /// Parse the brace contents of a directive.
    ///
    /// Accepts `key="value"`, `key='value'` and bare `key=value` pairs; keys
    /// may contain hyphens. Anything unrecognized is skipped.
    #[must_use]
    pub fn parse(attrs_str: &str) -> Self {
        let mut args = Self::default();
        let mut remaining = attrs_str.trim();

        while !remaining.is_empty() {
            remaining = remaining.trim_start();
            if let Some((key, value, rest)) = parse_key_value(remaining) {
                args.attrs.insert(key.to_owned(), value.to_owned());
                remaining = rest;
            } else if remaining.is_empty() {
                break;
            } else {
                remaining = &remaining[remaining.chars().next().map_or(0, char::len_utf8)..];
            }
        }

        args
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// Parse one `key=value` pair, returning the rest of the input.
fn parse_key_value(input: &str) -> Option<(&str, &str, &str)> {
    let eq = input.find('=')?;
    let key = &input[..eq];
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return None;
    }

    let rest = &input[eq + 1..];
    let mut chars = rest.chars();
    match chars.next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &rest[1..];
            let end = body.find(quote)?;
            Some((key, &body[..end], &body[end + 1..]))
        }
        Some(_) => {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            Some((key, &rest[..end], &rest[end..]))
        }
        None => Some((key, "", "")),
    }
}

/// A container directive currently open in the input.
#[derive(Debug)]
enum OpenContainer {
    Alert,
    QuickLink { href: String, name: String },
    /// Unknown container passed through verbatim.
    PassThrough,
}

/// Line-based preprocessor replacing widget directives with HTML blocks.
///
/// One instance per document; warnings accumulate across the pass.
#[derive(Debug, Default)]
pub struct WidgetProcessor {
    stack: Vec<OpenContainer>,
    warnings: Vec<String>,
}

impl WidgetProcessor {
    /// Create a processor with no open containers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Markdown document, replacing directives with HTML blocks.
    pub fn process(&mut self, markdown: &str) -> String {
        let mut out = String::with_capacity(markdown.len());
        for (number, line) in markdown.lines().enumerate() {
            if let Some(rest) = line.strip_prefix(":::") {
                if rest.trim().is_empty() {
                    self.close_container(line, &mut out);
                } else {
                    self.open_container(rest.trim(), line, number + 1, &mut out);
                }
            } else if let Some(rest) = line.strip_prefix("::") {
                self.leaf(rest.trim(), line, &mut out);
            } else {
                out.push_str(line);
                out.push('\n');
            }
        }

        // Close anything the author left open so the page stays well-formed
        while let Some(container) = self.stack.pop() {
            if let Some(html) = container_close_html(&container) {
                self.warnings
                    .push("unclosed ::: directive closed at end of page".to_owned());
                out.push('\n');
                out.push_str(&html);
                out.push('\n');
            }
        }

        out
    }

    /// Warnings recorded during processing.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn open_container(&mut self, spec: &str, line: &str, number: usize, out: &mut String) {
        let (name, args) = split_directive(spec);
        match name {
            "alert" => {
                let severity = match args.get("severity") {
                    // Missing severity defaults to info; an unknown one
                    // renders unstyled rather than failing the page
                    None => Some(Severity::Info),
                    Some(tag) => {
                        let parsed = Severity::parse(tag);
                        if parsed.is_none() {
                            self.warnings.push(format!(
                                "line {number}: unknown alert severity \"{tag}\""
                            ));
                        }
                        parsed
                    }
                };
                self.stack.push(OpenContainer::Alert);
                push_block(out, &alert_open(severity));
            }
            "quicklink" => {
                let (Some(href), Some(link_name)) = (args.get("href"), args.get("name")) else {
                    self.warnings.push(format!(
                        "line {number}: quicklink requires href and name"
                    ));
                    out.push_str(line);
                    out.push('\n');
                    return;
                };
                self.stack.push(OpenContainer::QuickLink {
                    href: href.to_owned(),
                    name: link_name.to_owned(),
                });
                push_block(out, &quicklink_open());
            }
            _ => {
                self.stack.push(OpenContainer::PassThrough);
                out.push_str(line);
                out.push('\n');
            }
        }
    }

    fn close_container(&mut self, line: &str, out: &mut String) {
        match self.stack.pop() {
            Some(container) => match container_close_html(&container) {
                Some(html) => {
                    out.push('\n');
                    out.push_str(&html);
                    out.push('\n');
                }
                None => {
                    out.push_str(line);
                    out.push('\n');
                }
            },
            // Stray close with nothing open: leave it to render as text
            None => {
                out.push_str(line);
                out.push('\n');
            }
        }
    }

    fn leaf(&mut self, spec: &str, line: &str, out: &mut String) {
        let (name, args) = split_directive(spec);
        if name == "guide-nav" {
            let previous = navigator_side(&args, "prev");
            let next = navigator_side(&args, "next");
            push_block(out, &guide_navigator(previous.as_ref(), next.as_ref()));
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
}

/// Split `name{attrs}` into the directive name and parsed attributes.
fn split_directive(spec: &str) -> (&str, DirectiveArgs) {
    match spec.find('{') {
        Some(brace) => {
            let name = spec[..brace].trim();
            let attrs = spec[brace + 1..].rfind('}').map_or("", |end| {
                &spec[brace + 1..brace + 1 + end]
            });
            (name, DirectiveArgs::parse(attrs))
        }
        None => (spec.trim(), DirectiveArgs::default()),
    }
}

/// Build one navigator side from `{side}-href` / `{side}-label` attributes.
fn navigator_side(args: &DirectiveArgs, side: &str) -> Option<NavigatorLink> {
    let href = args.get(&format!("{side}-href"))?;
    let label = args.get(&format!("{side}-label"))?;
    Some(NavigatorLink {
        href: href.to_owned(),
        label: label.to_owned(),
    })
}

fn container_close_html(container: &OpenContainer) -> Option<String> {
    match container {
        OpenContainer::Alert => Some(alert_close().to_owned()),
        OpenContainer::QuickLink { href, name } => Some(quicklink_close(href, name)),
        OpenContainer::PassThrough => None,
    }
}

/// Emit an HTML block followed by a blank line so the body parses as Markdown.
fn push_block(out: &mut String, html: &str) {
    out.push_str(html);
    out.push('\n');
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkdownRenderer;
    use pretty_assertions::assert_eq;

    fn process(markdown: &str) -> (String, Vec<String>) {
        let mut processor = WidgetProcessor::new();
        let out = processor.process(markdown);
        (out, processor.warnings().to_vec())
    }

    #[test]
    fn test_args_parse_quoted_and_bare() {
        let args = DirectiveArgs::parse(r#"href="/x" name='User Manual' open=true"#);

        assert_eq!(args.get("href"), Some("/x"));
        assert_eq!(args.get("name"), Some("User Manual"));
        assert_eq!(args.get("open"), Some("true"));
    }

    #[test]
    fn test_args_parse_hyphenated_keys() {
        let args = DirectiveArgs::parse(r#"next-href="/setup" next-label="Setup""#);

        assert_eq!(args.get("next-href"), Some("/setup"));
        assert_eq!(args.get("next-label"), Some("Setup"));
    }

    #[test]
    fn test_args_parse_skips_garbage() {
        let args = DirectiveArgs::parse(r#"?? href="/x" !!"#);

        assert_eq!(args.get("href"), Some("/x"));
    }

    #[test]
    fn test_alert_directive_wraps_content() {
        let (out, warnings) = process(":::alert{severity=\"warning\"}\nBe careful.\n:::\n");

        assert!(out.contains(r#"<div class="alert alert-warning">"#));
        assert!(out.contains("Be careful."));
        assert!(out.contains("</div>"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_alert_unknown_severity_unstyled_with_warning() {
        let (out, warnings) = process(":::alert{severity=\"fatal\"}\nBoom.\n:::\n");

        assert!(out.contains(r#"<div class="alert">"#));
        assert!(!out.contains("alert-fatal"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("fatal"));
    }

    #[test]
    fn test_alert_missing_severity_defaults_to_info() {
        let (out, warnings) = process(":::alert\nNote.\n:::\n");

        assert!(out.contains("alert-info"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_alert_body_renders_as_markdown() {
        let mut processor = WidgetProcessor::new();
        let processed = processor.process(":::alert{severity=\"info\"}\nSome **bold** text.\n:::\n");
        let result = MarkdownRenderer::new().render_markdown(&processed);

        assert!(result.html.contains(r#"<div class="alert alert-info">"#));
        assert!(result.html.contains("<strong>bold</strong>"));
        assert!(result.html.contains("</div>"));
    }

    #[test]
    fn test_quicklink_directive() {
        let (out, warnings) =
            process(":::quicklink{href=\"/user-manual\" name=\"User Manual\"}\nLearn more.\n:::\n");

        assert!(out.contains(r#"class="quicklink box""#));
        assert!(out.contains(r#"href="/user-manual""#));
        assert!(out.contains("User Manual"));
        assert!(out.contains("Learn more."));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_quicklink_missing_href_passes_through() {
        let (out, warnings) = process(":::quicklink{name=\"X\"}\nBody\n:::\n");

        assert!(out.contains(":::quicklink"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("href"));
    }

    #[test]
    fn test_guide_nav_leaf_next_only() {
        let (out, warnings) =
            process("::guide-nav{next-href=\"/guides/setup\" next-label=\"Setup\"}\n");

        assert!(out.contains("guide-navigator"));
        assert!(out.contains("navigator-next"));
        assert!(!out.contains("navigator-prev"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_directives_pass_through() {
        let input = ":::tabs\ncontent\n:::\n::youtube{id=\"x\"}\n";
        let (out, warnings) = process(input);

        assert!(out.contains(":::tabs"));
        assert!(out.contains(":::\n"));
        assert!(out.contains("::youtube"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_nested_unknown_container_does_not_steal_close() {
        let input = ":::alert\n:::tabs\nx\n:::\nstill inside alert\n:::\n";
        let (out, _) = process(input);

        // The first ::: closes the unknown tabs container (passed through),
        // the second closes the alert
        assert!(out.contains("still inside alert"));
        let close_count = out.matches("</div>").count();
        assert_eq!(close_count, 1);
    }

    #[test]
    fn test_unclosed_container_closed_at_end_with_warning() {
        let (out, warnings) = process(":::alert{severity=\"info\"}\ndangling\n");

        assert!(out.contains("</div>"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("unclosed"));
    }

    #[test]
    fn test_stray_close_renders_as_text() {
        let (out, warnings) = process("some text\n:::\n");

        assert!(out.contains(":::"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_plain_markdown_unchanged() {
        let input = "# Title\n\nA paragraph with :colons: inside.\n";
        let (out, warnings) = process(input);

        assert_eq!(out, input);
        assert!(warnings.is_empty());
    }
}
