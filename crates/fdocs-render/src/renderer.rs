//! Markdown to HTML rendering with heading anchors.

use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::heading::HeadingState;
use crate::{TocEntry, escape_html};

/// Link glyph appended to anchored headings.
const SVG_LINK: &str = r#"<svg class="heading-glyph" viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="m7.775 3.275 1.25-1.25a3.5 3.5 0 1 1 4.95 4.95l-2.5 2.5a3.5 3.5 0 0 1-4.95 0 .751.751 0 0 1 1.06-1.06 2 2 0 0 0 2.83 0l2.5-2.5a2 2 0 0 0-2.83-2.83l-1.25 1.25a.751.751 0 0 1-1.06-1.06Zm-4.69 9.64a2 2 0 0 0 2.83 0l1.25-1.25a.751.751 0 0 1 1.06 1.06l-1.25 1.25a3.5 3.5 0 1 1-4.95-4.95l2.5-2.5a3.5 3.5 0 0 1 4.95 0 .751.751 0 0 1-1.06 1.06 2 2 0 0 0-2.83 0l-2.5 2.5a2 2 0 0 0 0 2.83Z"></path></svg>"#;

/// Result of rendering one page.
#[derive(Clone, Debug, Default)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Title extracted from the first H1 heading, if any.
    pub title: Option<String>,
    /// Table of contents entries for anchored headings.
    pub toc: Vec<TocEntry>,
}

/// State of an open fenced or indented code block.
#[derive(Default)]
struct CodeBlock {
    lang: Option<String>,
    content: String,
}

/// Image whose alt text is still being collected.
struct PendingImage {
    src: String,
    title: String,
    alt: String,
}

/// Markdown renderer producing the site's HTML dialect.
///
/// Headings with plain-text content get a page-unique anchor id and a
/// self-link wrapper; headings with rich inline content render bare (the
/// documented fallback). One renderer per page render keeps slugs scoped
/// to the page.
pub struct MarkdownRenderer {
    output: String,
    heading: HeadingState,
    code: Option<CodeBlock>,
    image: Option<PendingImage>,
    table_in_head: bool,
}

impl MarkdownRenderer {
    /// Create a renderer with a fresh slug scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            heading: HeadingState::default(),
            code: None,
            image: None,
            table_in_head: false,
        }
    }

    /// Render a Markdown document.
    pub fn render_markdown(mut self, markdown: &str) -> RenderResult {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let parser = Parser::new_ext(markdown, options);
        for event in parser {
            self.process_event(event);
        }

        RenderResult {
            html: self.output,
            title: self.heading.take_title(),
            toc: self.heading.take_toc(),
        }
    }

    /// Push inline content to the output or the open heading buffer.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    /// Push inline markup, disabling the anchor if inside a heading.
    fn push_rich_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.mark_rich();
        }
        self.push_inline(content);
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(&tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => {
                if self.heading.is_active() {
                    self.heading.mark_rich();
                }
                self.push_inline(&html);
            }
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.push_inline("<br>"),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(_)
            | Event::FootnoteReference(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    fn start_tag(&mut self, tag: &Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, .. } => {
                // Opening tag is written in end_tag once the anchor id is known
                self.heading.start(heading_level_to_num(*level));
            }
            Tag::BlockQuote(_) => self.output.push_str("<blockquote>"),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => info
                        .split_whitespace()
                        .next()
                        .map(std::borrow::ToOwned::to_owned),
                    _ => None,
                };
                self.code = Some(CodeBlock {
                    lang,
                    content: String::new(),
                });
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => {
                    let _ = write!(self.output, r#"<ol start="{n}">"#);
                }
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::Table(_) => self.output.push_str("<table>"),
            Tag::TableHead => {
                self.table_in_head = true;
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => self.output.push_str("<tr>"),
            Tag::TableCell => {
                self.output
                    .push_str(if self.table_in_head { "<th>" } else { "<td>" });
            }
            Tag::Emphasis => self.push_rich_inline("<em>"),
            Tag::Strong => self.push_rich_inline("<strong>"),
            Tag::Strikethrough => self.push_rich_inline("<s>"),
            Tag::Link { dest_url, .. } => {
                let link = format!(r#"<a href="{}">"#, escape_html(dest_url));
                self.push_rich_inline(&link);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                if self.heading.is_active() {
                    self.heading.mark_rich();
                }
                self.image = Some(PendingImage {
                    src: dest_url.to_string(),
                    title: title.to_string(),
                    alt: String::new(),
                });
            }
            Tag::FootnoteDefinition(_)
            | Tag::HtmlBlock
            | Tag::MetadataBlock(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Superscript
            | Tag::Subscript => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(_) => {
                let done = self.heading.complete();
                let level = done.level;
                let content = done.html.trim();
                match done.id {
                    Some(id) => {
                        let _ = write!(
                            self.output,
                            r##"<a class="heading-anchor" href="#{id}"><h{level} id="{id}">{content}{SVG_LINK}</h{level}></a>"##,
                        );
                    }
                    None => {
                        let _ = write!(self.output, "<h{level}>{content}</h{level}>");
                    }
                }
            }
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>"),
            TagEnd::CodeBlock => {
                if let Some(code) = self.code.take() {
                    match code.lang {
                        Some(lang) => {
                            let _ = write!(
                                self.output,
                                r#"<pre><code class="language-{}">{}</code></pre>"#,
                                escape_html(&lang),
                                escape_html(&code.content),
                            );
                        }
                        None => {
                            let _ = write!(
                                self.output,
                                "<pre><code>{}</code></pre>",
                                escape_html(&code.content),
                            );
                        }
                    }
                }
            }
            TagEnd::List(ordered) => {
                self.output.push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.table_in_head = false;
                self.output.push_str("</tr></thead><tbody>");
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                self.output
                    .push_str(if self.table_in_head { "</th>" } else { "</td>" });
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Link => self.push_inline("</a>"),
            TagEnd::Image => {
                if let Some(image) = self.image.take() {
                    let title_attr = if image.title.is_empty() {
                        String::new()
                    } else {
                        format!(r#" title="{}""#, escape_html(&image.title))
                    };
                    let img = format!(
                        r#"<img src="{}"{title_attr} alt="{}">"#,
                        escape_html(&image.src),
                        escape_html(&image.alt),
                    );
                    self.push_inline(&img);
                }
            }
            TagEnd::FootnoteDefinition
            | TagEnd::HtmlBlock
            | TagEnd::MetadataBlock(_)
            | TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition
            | TagEnd::Superscript
            | TagEnd::Subscript => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = &mut self.code {
            code.content.push_str(text);
        } else if let Some(image) = &mut self.image {
            image.alt.push_str(text);
        } else if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.heading.is_active() {
            self.heading.mark_rich();
            self.heading.push_text(code);
        }
        let html = format!("<code>{}</code>", escape_html(code));
        self.push_inline(&html);
    }

    fn soft_break(&mut self) {
        if let Some(code) = &mut self.code {
            code.content.push('\n');
        } else if let Some(image) = &mut self.image {
            image.alt.push(' ');
        } else {
            if self.heading.is_active() {
                self.heading.push_text(" ");
            }
            self.push_inline("\n");
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a heading level enum to a number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(markdown: &str) -> RenderResult {
        MarkdownRenderer::new().render_markdown(markdown)
    }

    #[test]
    fn test_basic_paragraph() {
        let result = render("Hello, world!");
        assert_eq!(result.html, "<p>Hello, world!</p>");
    }

    #[test]
    fn test_heading_gets_anchor_and_id() {
        let result = render("## Section Title");

        assert!(result.html.contains(r##"<a class="heading-anchor" href="#section-title">"##));
        assert!(result.html.contains(r#"<h2 id="section-title">Section Title"#));
        assert!(result.html.contains("heading-glyph"));
        assert!(result.html.ends_with("</h2></a>"));
        assert_eq!(result.toc.len(), 1);
        assert_eq!(result.toc[0].level, 2);
        assert_eq!(result.toc[0].title, "Section Title");
        assert_eq!(result.toc[0].id, "section-title");
    }

    #[test]
    fn test_duplicate_headings_get_distinct_ids() {
        let result = render("## FAQ\n\n## FAQ\n\n## FAQ");

        assert!(result.html.contains(r#"id="faq""#));
        assert!(result.html.contains(r#"id="faq-1""#));
        assert!(result.html.contains(r#"id="faq-2""#));
        assert_eq!(result.toc.len(), 3);
    }

    #[test]
    fn test_rich_heading_renders_without_anchor() {
        let result = render("## Install `npm`");

        assert!(result.html.contains("<h2>"));
        assert!(result.html.contains("<code>npm</code>"));
        assert!(!result.html.contains("heading-anchor"));
        assert!(!result.html.contains("id="));
        assert!(result.toc.is_empty());
    }

    #[test]
    fn test_emphasized_heading_renders_without_anchor() {
        let result = render("## A *styled* heading");

        assert!(result.html.contains("<em>styled</em>"));
        assert!(!result.html.contains("heading-anchor"));
    }

    #[test]
    fn test_title_extracted_from_first_h1() {
        let result = render("# User Manual\n\nIntro\n\n# Second");

        assert_eq!(result.title.as_deref(), Some("User Manual"));
        // First H1 is still rendered
        assert!(result.html.contains(r#"<h1 id="user-manual">"#));
    }

    #[test]
    fn test_code_block_with_language() {
        let result = render("```rust\nfn main() {}\n```");

        assert!(result.html.contains(r#"<pre><code class="language-rust">"#));
        assert!(result.html.contains("fn main() {}"));
    }

    #[test]
    fn test_code_block_without_language() {
        let result = render("```\nplain\n```");

        assert!(result.html.contains("<pre><code>plain"));
    }

    #[test]
    fn test_code_block_content_escaped() {
        let result = render("```\n<b>&\n```");

        assert!(result.html.contains("&lt;b&gt;&amp;"));
    }

    #[test]
    fn test_lists() {
        let result = render("- a\n- b");
        assert!(result.html.contains("<ul><li>a</li><li>b</li></ul>"));

        let result = render("3. c\n4. d");
        assert!(result.html.contains(r#"<ol start="3">"#));
    }

    #[test]
    fn test_blockquote() {
        let result = render("> quoted");

        assert!(result.html.contains("<blockquote><p>quoted</p></blockquote>"));
    }

    #[test]
    fn test_link_href_escaped() {
        let result = render(r#"[x](/a"b)"#);

        assert!(result.html.contains(r#"<a href="/a%22b">"#) || result.html.contains("&quot;"));
    }

    #[test]
    fn test_image_with_alt() {
        let result = render("![Alt text](logo.svg)");

        assert!(result.html.contains(r#"<img src="logo.svg" alt="Alt text">"#));
    }

    #[test]
    fn test_emphasis_and_strikethrough() {
        let result = render("*it* **bold** ~~gone~~");

        assert!(result.html.contains("<em>it</em>"));
        assert!(result.html.contains("<strong>bold</strong>"));
        assert!(result.html.contains("<s>gone</s>"));
    }

    #[test]
    fn test_table() {
        let result = render("| A | B |\n|---|---|\n| 1 | 2 |");

        assert!(result.html.contains("<table><thead><tr><th>A</th><th>B</th>"));
        assert!(result.html.contains("<tbody><tr><td>1</td><td>2</td></tr></tbody></table>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let result = render("<div class=\"x\">raw</div>");

        assert!(result.html.contains("<div class=\"x\">"));
    }

    #[test]
    fn test_rule_and_break() {
        let result = render("a\n\n---\n\nb  \nc");

        assert!(result.html.contains("<hr>"));
        assert!(result.html.contains("<br>"));
    }

    #[test]
    fn test_text_escaped_outside_code() {
        let result = render("a < b & c");

        assert!(result.html.contains("a &lt; b &amp; c"));
    }
}
