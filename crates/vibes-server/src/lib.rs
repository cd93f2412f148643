//! HTTP server for the type wiki content engine.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - JSON endpoints for page lookups, listings and type profiles
//! - The sitemap as `application/xml`
//!
//! The content index is built once before the listener starts and never
//! changes afterwards; handlers only read it.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use vibes_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         content_dir: PathBuf::from("content"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use state::AppState;
use vibes_content::{ContentIndex, DEFAULT_EXTENSION, FsSource};
use vibes_sitemap::{BaseUrl, RouteCatalog};

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content root directory.
    pub content_dir: PathBuf,
    /// Document extension.
    pub extension: String,
    /// Parse all documents before accepting requests.
    pub preload: bool,
    /// Site name appended to page titles.
    pub site_name: String,
    /// Public base URL for sitemap locations.
    pub base_url: String,
    /// Routes listed in the sitemap next to content pages.
    pub routes: RouteCatalog,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            content_dir: PathBuf::from("content"),
            extension: DEFAULT_EXTENSION.to_owned(),
            preload: true,
            site_name: "MBTI Wiki".to_owned(),
            base_url: "https://mbtivibes.com".to_owned(),
            routes: RouteCatalog::default(),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if content discovery fails, the base URL is invalid, or
/// the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let base_url = BaseUrl::parse(&config.base_url)?;

    let source = FsSource::with_extension(config.content_dir.clone(), &config.extension);
    let index = Arc::new(ContentIndex::load(&source)?);
    if config.preload {
        let index = Arc::clone(&index);
        tokio::task::spawn_blocking(move || index.preload()).await?;
    }

    let state = Arc::new(AppState::new(
        index,
        config.site_name.clone(),
        &config.routes,
        &base_url,
        &config.version,
    )?);

    let app = app::create_router(state);

    // Bind and run server
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

/// Create server configuration from the loaded config file.
///
/// # Arguments
///
/// * `config` - Loaded configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &vibes_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.content_resolved.root_dir.clone(),
        extension: config.content_resolved.extension.clone(),
        preload: config.content_resolved.preload,
        site_name: config.site.name.clone(),
        base_url: config.site.base_url.clone(),
        routes: config.sitemap_resolved.clone(),
        version,
    }
}
