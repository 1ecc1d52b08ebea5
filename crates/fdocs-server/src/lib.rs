//! HTTP server for the fdocs documentation engine.
//!
//! Serves three surfaces from one axum router:
//! - JSON API endpoints for the navigation tree and rendered pages
//! - server-rendered HTML pages wrapped in the site shell
//! - embedded static assets (stylesheet, navigation script)
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use fdocs_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         source_dir: PathBuf::from("docs"),
//!         nav_file: PathBuf::from("docs/navigation.json"),
//!         ..Default::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use fdocs_nav::{OpenSet, render_tree};
use fdocs_site::{HeaderLink, Site, SiteChrome};

use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Documentation source directory.
    pub source_dir: PathBuf,
    /// Navigation JSON file.
    pub nav_file: PathBuf,
    /// Site title shown in the chrome.
    pub site_title: String,
    /// Footer text, omitted when `None`.
    pub footer_text: Option<String>,
    /// External links shown in the header, as (label, url) pairs.
    pub header_links: Vec<(String, String)>,
    /// Enable verbose output (log render warnings).
    pub verbose: bool,
    /// Application version (for ETag generation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            source_dir: PathBuf::from("docs"),
            nav_file: PathBuf::from("docs/navigation.json"),
            site_title: "Documentation".to_owned(),
            footer_text: None,
            header_links: Vec::new(),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server until shutdown.
///
/// # Errors
///
/// Returns an error if the navigation source fails to load or the server
/// fails to bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let site = Site::open(config.source_dir.clone(), &config.nav_file)?;

    // The tree is static for the server's lifetime; render the sidebar once
    // in its initial all-closed state (nav.js drives toggling in the browser)
    let nav_html = render_tree(&site.nav().entries, &OpenSet::new());

    let chrome = SiteChrome {
        title: config.site_title.clone(),
        footer_text: config.footer_text.clone(),
        links: config
            .header_links
            .iter()
            .map(|(label, url)| HeaderLink {
                label: label.clone(),
                url: url.clone(),
            })
            .collect(),
        asset_base: "/assets".to_owned(),
    };

    let state = Arc::new(AppState {
        site,
        chrome,
        nav_html,
        verbose: config.verbose,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from an fdocs config.
#[must_use]
pub fn server_config_from_config(
    config: &fdocs_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        nav_file: config.docs_resolved.nav_file.clone(),
        site_title: config.site.title.clone(),
        footer_text: config.site.footer_text.clone(),
        header_links: config
            .site
            .links
            .iter()
            .map(|link| (link.label.clone(), link.url.clone()))
            .collect(),
        verbose,
        version,
    }
}
