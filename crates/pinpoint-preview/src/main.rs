//! Preview server binary for the Pinpoint map widget.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `pinpoint-config.yaml` (or `PINPOINT_CONFIG`)
//! 3. Seed the event catalog
//! 4. Compile templates and serve until `Ctrl-C`

use std::path::PathBuf;
use std::sync::Arc;

use pinpoint_core::{PinpointConfig, seed_catalog};
use pinpoint_preview::{AppState, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "pinpoint-config.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("pinpoint-preview starting");

    // 2. Load configuration.
    let path = std::env::var("PINPOINT_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = PinpointConfig::load_or_default(&path)?;
    info!(
        path = %path.display(),
        host = config.server.host,
        port = config.server.port,
        zoom = config.map.zoom,
        "Configuration loaded"
    );

    // 3. Seed the catalog.
    let catalog = seed_catalog();
    info!(events = catalog.len(), "Event catalog seeded");

    // 4. Serve.
    let state = Arc::new(AppState::new(catalog, config.map)?);
    start_server(&config.server, state).await?;

    Ok(())
}
