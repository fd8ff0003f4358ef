//! # ayah-audio
//!
//! Backend library for resolving playable Quran recitation audio URLs
//! across multiple unreliable third-party hosting networks, plus a thin
//! passthrough for the upstream Quran-text API.
//!
//! ## Design Philosophy
//!
//! - **Availability over correctness** - Resolution never fails: when no
//!   candidate URL answers, a well-known fallback URL is returned instead
//!   of an error. A dead URL is recoverable client-side; an API error
//!   is not.
//! - **Deterministic fallback order** - Candidates are probed strictly in
//!   priority order, so the highest-priority reachable URL always wins.
//! - **Cheap probes** - Reachability checks transfer at most two bytes of
//!   body (HEAD first, ranged GET as fallback) with tight timeouts.
//! - **Library-first** - The resolver is usable without the HTTP server;
//!   the server binary is a thin shell over [`api::start_api_server`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use ayah_audio::candidates::{Bitrate, VerseRef};
//! use ayah_audio::config::AudioConfig;
//! use ayah_audio::resolver::AudioResolver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = AudioResolver::new(AudioConfig::default())?;
//!
//!     let resolution = resolver
//!         .resolve(
//!             "alafasy",
//!             Bitrate::Kbps128,
//!             VerseRef { surah: 2, ayah: 255, global_ayah: 262 },
//!         )
//!         .await;
//!
//!     println!("play {}", resolution.url);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Candidate URL generation
pub mod candidates;
/// Static reciter catalog
pub mod catalog;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// URL reachability probing
pub mod probe;
/// Audio URL resolution
pub mod resolver;
/// Quran-text API passthrough
pub mod text_proxy;

// Re-export commonly used types
pub use candidates::{Bitrate, VerseRef};
pub use catalog::{ReciterCatalog, ReciterEntry};
pub use config::{ApiConfig, AudioConfig, Config, TextProxyConfig};
pub use error::{ApiError, Error, ErrorDetail, Result, ToHttpStatus};
pub use probe::{HttpProbe, UrlProbe};
pub use resolver::{AudioResolver, Resolution};
pub use text_proxy::TextProxy;

use std::sync::Arc;

/// Run the API server with graceful signal handling.
///
/// Serves until a termination signal arrives, then returns.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with fallbacks if signal
///   registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
///
/// # Example
///
/// ```no_run
/// use ayah_audio::{Config, run_with_shutdown};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Arc::new(Config::default());
///     run_with_shutdown(config).await?;
///     Ok(())
/// }
/// ```
pub async fn run_with_shutdown(config: Arc<Config>) -> Result<()> {
    tokio::select! {
        result = api::start_api_server(config) => result,
        () = wait_for_signal() => {
            tracing::info!("Shutting down");
            Ok(())
        }
    }
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Set up signal handlers - these may fail in restricted environments (containers, tests)
    let sigterm_result = signal(SignalKind::terminate());
    let sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result, sigint_result) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        (Err(e), _) => {
            tracing::warn!(error = %e, "Could not register SIGTERM handler, waiting for SIGINT only");
            if let Ok(mut sigint) = signal(SignalKind::interrupt()) {
                sigint.recv().await;
                tracing::info!("Received SIGINT signal (Ctrl+C)");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
        (_, Err(e)) => {
            tracing::warn!(error = %e, "Could not register SIGINT handler, waiting for SIGTERM only");
            if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM signal");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
