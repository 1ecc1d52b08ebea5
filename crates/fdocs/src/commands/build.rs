//! `fdocs build` command implementation.
//!
//! Exports the site as static HTML: every route reachable from the
//! navigation tree plus the home page, written as `<path>/index.html`
//! under the output directory so a plain file server can serve clean URLs.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use fdocs_config::{CliSettings, Config};
use fdocs_nav::{OpenSet, render_tree};
use fdocs_site::{HeaderLink, PageData, Site, SiteChrome, SiteError, assets, render_shell};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover fdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the generated site (default: dist/).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    /// Execute the build command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let output_dir = self.output_dir.unwrap_or_else(|| {
            config
                .config_path
                .as_deref()
                .and_then(Path::parent)
                .map_or_else(|| PathBuf::from("dist"), |dir| dir.join("dist"))
        });

        output.info(&format!(
            "Source: {}",
            config.docs_resolved.source_dir.display()
        ));
        output.info(&format!("Output: {}", output_dir.display()));

        let site = Site::open(
            config.docs_resolved.source_dir.clone(),
            &config.docs_resolved.nav_file,
        )?;
        for warning in &site.nav().warnings {
            output.warning(&format!("navigation: {warning}"));
        }

        let nav_html = render_tree(&site.nav().entries, &OpenSet::new());
        let chrome = SiteChrome {
            title: config.site.title.clone(),
            footer_text: config.site.footer_text.clone(),
            links: config
                .site
                .links
                .iter()
                .map(|link| HeaderLink {
                    label: link.label.clone(),
                    url: link.url.clone(),
                })
                .collect(),
            asset_base: "/assets".to_owned(),
        };

        // Home page first, then every navigation route in order
        let mut targets = vec![String::new()];
        targets.extend(site.route_paths());

        let mut written = 0_usize;
        let mut failed = Vec::new();
        for path in &targets {
            match export_page(&site, &chrome, &nav_html, path, &output_dir) {
                Ok(()) => written += 1,
                Err(CliError::Site(SiteError::PageNotFound(_))) => {
                    failed.push(path.clone());
                }
                Err(err) => return Err(err),
            }
        }

        write_assets(&output_dir)?;

        for path in &failed {
            output.warning(&format!("No source file for route /{path}"));
        }
        output.success(&format!(
            "Exported {written} page(s) to {}",
            output_dir.display()
        ));

        Ok(())
    }
}

/// Render one page and write it as `<path>/index.html`.
fn export_page(
    site: &Site,
    chrome: &SiteChrome,
    nav_html: &str,
    path: &str,
    output_dir: &Path,
) -> Result<(), CliError> {
    let result = site.render_page(path)?;

    let html = render_shell(
        chrome,
        &PageData {
            title: result.title.as_deref(),
            nav_html,
            content: &result.html,
        },
    );

    let page_dir = if path.is_empty() {
        output_dir.to_path_buf()
    } else {
        output_dir.join(path)
    };
    fs::create_dir_all(&page_dir)?;
    fs::write(page_dir.join("index.html"), html)?;

    Ok(())
}

/// Write the embedded frontend assets next to the exported pages.
fn write_assets(output_dir: &Path) -> Result<(), CliError> {
    let assets_dir = output_dir.join("assets");
    fs::create_dir_all(&assets_dir)?;
    fs::write(assets_dir.join("style.css"), assets::STYLE_CSS)?;
    fs::write(assets_dir.join("nav.js"), assets::NAV_JS)?;
    Ok(())
}
