//! HTML page shell.
//!
//! Wraps rendered page content with the site chrome: header with logo and
//! external links, navigation sidebar, main content column, footer. Every
//! page on the site goes through this one template.

use std::fmt::Write;

use fdocs_render::escape_html;

/// External link shown in the site header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderLink {
    /// Link text.
    pub label: String,
    /// Absolute URL.
    pub url: String,
}

/// Static chrome configuration shared by every page.
#[derive(Clone, Debug)]
pub struct SiteChrome {
    /// Site title, shown in the header and the document title.
    pub title: String,
    /// Footer text, omitted when `None`.
    pub footer_text: Option<String>,
    /// External links rendered on the right of the header.
    pub links: Vec<HeaderLink>,
    /// Base URL for stylesheet and script assets.
    pub asset_base: String,
}

impl Default for SiteChrome {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            footer_text: None,
            links: Vec::new(),
            asset_base: "/assets".to_owned(),
        }
    }
}

/// Per-page data fed to the shell.
pub struct PageData<'a> {
    /// Page title; the document title falls back to the site title alone.
    pub title: Option<&'a str>,
    /// Pre-rendered navigation sidebar markup.
    pub nav_html: &'a str,
    /// Rendered page content.
    pub content: &'a str,
}

/// Render a complete HTML page.
#[must_use]
pub fn render_shell(chrome: &SiteChrome, page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    match page.title {
        Some(title) => {
            let _ = writeln!(
                html,
                "<title>{} · {}</title>",
                escape_html(title),
                escape_html(&chrome.title)
            );
        }
        None => {
            let _ = writeln!(html, "<title>{}</title>", escape_html(&chrome.title));
        }
    }
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{0}/style.css\">\n<script defer src=\"{0}/nav.js\"></script>",
        escape_html(&chrome.asset_base)
    );
    html.push_str("</head>\n<body>\n");

    // Header: logo link home, external links on the right
    html.push_str("<header class=\"header\">\n<div class=\"header-inner\">\n");
    let _ = writeln!(
        html,
        "<a href=\"/\" class=\"header-logo\">{}</a>",
        escape_html(&chrome.title)
    );
    if !chrome.links.is_empty() {
        html.push_str("<nav class=\"header-links\">\n");
        for link in &chrome.links {
            let _ = writeln!(
                html,
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"btn-link\">{}</a>",
                escape_html(&link.url),
                escape_html(&link.label)
            );
        }
        html.push_str("</nav>\n");
    }
    html.push_str("</div>\n</header>\n");

    // Sidebar + content
    html.push_str("<div class=\"layout\">\n");
    html.push_str(page.nav_html);
    html.push_str("\n<main class=\"rich-text\">\n");
    html.push_str(page.content);
    html.push_str("\n</main>\n</div>\n");

    if let Some(footer) = &chrome.footer_text {
        let _ = writeln!(
            html,
            "<footer class=\"footer text-small\">{}</footer>",
            escape_html(footer)
        );
    }

    html.push_str("</body>\n</html>");
    html
}
