//! Audio URL resolution
//!
//! Drives candidate generation and probing together: walk the candidate
//! sequence in priority order, probe each URL, return the first one that
//! answers. Probing is strictly sequential, which makes the outcome
//! deterministic: among several reachable candidates the highest-priority
//! one always wins.
//!
//! Resolution is total. When every probeable candidate is dead, the
//! last-resort URL is returned unprobed; a wrong or dead URL is preferred
//! over an error response because playback failure is recoverable
//! client-side while an API error kills the whole feature.

use crate::candidates::{Bitrate, VerseRef, candidate_urls, last_resort_url};
use crate::catalog::ReciterCatalog;
use crate::config::AudioConfig;
use crate::error::Result;
use crate::probe::{HttpProbe, UrlProbe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A resolved audio URL
///
/// Always present; resolution has no "not found" outcome.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Resolution {
    /// The playable audio URL
    pub url: String,
}

/// Resolves reciter/verse coordinates to a playable audio URL
///
/// Holds the static catalog, the audio host configuration and a probe.
/// Stateless across requests; `resolve` takes `&self` and concurrent
/// resolutions do not affect each other.
pub struct AudioResolver {
    catalog: ReciterCatalog,
    config: AudioConfig,
    probe: Box<dyn UrlProbe>,
}

impl AudioResolver {
    /// Create a resolver with the production HTTP prober
    pub fn new(config: AudioConfig) -> Result<Self> {
        let probe = HttpProbe::new(&config)?;
        Ok(Self::with_probe(config, Box::new(probe)))
    }

    /// Create a resolver with a custom probe implementation
    ///
    /// Mainly for tests, which substitute scripted probes to exercise the
    /// fallback chain without a network.
    pub fn with_probe(config: AudioConfig, probe: Box<dyn UrlProbe>) -> Self {
        Self {
            catalog: ReciterCatalog::new(),
            config,
            probe,
        }
    }

    /// Resolve a playable URL for one verse
    ///
    /// Total: always returns a URL. Unknown reciter keys are legal and
    /// fall through to the shared tiers. Coordinates are trusted; range
    /// validation belongs to the caller's boundary.
    pub async fn resolve(&self, reciter_key: &str, bitrate: Bitrate, verse: VerseRef) -> Resolution {
        let entry = self.catalog.lookup(reciter_key);

        for url in candidate_urls(&self.config, entry, bitrate, verse) {
            tracing::debug!(url = %url, reciter = %reciter_key, "probing candidate");
            if self.probe.probe(&url).await {
                tracing::debug!(url = %url, reciter = %reciter_key, "candidate reachable");
                return Resolution { url };
            }
        }

        let url = last_resort_url(&self.config, bitrate, verse.global_ayah);
        tracing::debug!(
            url = %url,
            reciter = %reciter_key,
            "no candidate reachable, returning last resort"
        );
        Resolution { url }
    }
}
