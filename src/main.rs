//! Server binary for ayah-audio.
//!
//! Loads an optional JSON config file (first CLI argument), validates it,
//! and serves the REST API until a termination signal arrives.

use ayah_audio::{Config, run_with_shutdown};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ayah_audio=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&contents)?;
            tracing::info!(path = %path, "Loaded configuration file");
            config
        }
        None => Config::default(),
    };

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = match load_config() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e);
        }
    };

    run_with_shutdown(config).await?;
    Ok(())
}
