//! Box office client status tool.
//!
//! Performs the startup check the booking frontend runs on page load: loads
//! the configuration and session store, logs a diagnostic line, and reports
//! the stored identity when one is present.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use boxoffice::config::Config;
use boxoffice::session::{FileStore, Navigator, Session};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// A headless process has no page to redirect; log where the host
/// environment would navigate.
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, path: &str) {
        info!(path, "navigation requested");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("Theatre box office client initialized");

    let config = Config::load()?;
    info!(api = %config.api_base_url, "using API origin");

    let store = Arc::new(FileStore::new(Config::store_path()?));
    let session = Session::new(store, Arc::new(LoggingNavigator))
        .with_login_path(config.login_path.clone());

    // Navigation-state check: report the stored identity if logged in
    if session.is_authenticated() {
        if let Some((email, user_id)) = session.identity()? {
            info!(email = %email, user_id = %user_id, "user logged in");
        } else {
            info!("user logged in (no stored identity details)");
        }
    } else {
        info!("no active session");
    }

    Ok(())
}
