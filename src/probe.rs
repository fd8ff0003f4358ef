//! URL reachability probing
//!
//! Answers "is this URL likely to serve audio" with as few bytes as
//! possible. The core abstraction is the [`UrlProbe`] trait; the production
//! implementation is [`HttpProbe`], which issues a HEAD request first and
//! falls back to a two-byte ranged GET for hosts that reject HEAD.
//!
//! A probe never fails: every transport-level problem (DNS, refused
//! connection, TLS, timeout) means "not reachable" and maps to `false`.
//! The resolver's control flow stays free of error handling because of
//! this, at the cost of losing failure diagnostics beyond debug logs.

use crate::config::AudioConfig;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::{StatusCode, header};

/// Trait for checking whether a URL serves content
///
/// Implementations must be total: a probe returns `true` or `false`,
/// never an error. Tests substitute scripted implementations to exercise
/// the resolver without a network.
#[async_trait]
pub trait UrlProbe: Send + Sync {
    /// Check whether `url` is likely to serve audio
    async fn probe(&self, url: &str) -> bool;
}

/// Production prober backed by reqwest
///
/// The inner client carries the configured connect/total timeouts, so
/// every individual probe call is bounded independently of the request
/// that triggered it.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Create a prober with timeouts from the audio configuration
    pub fn new(config: &AudioConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.probe_connect_timeout)
            .timeout(config.probe_timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UrlProbe for HttpProbe {
    async fn probe(&self, url: &str) -> bool {
        // Cheapest check first: HEAD transfers no body at all.
        match self.client.head(url).send().await {
            Ok(response) if response.status().is_success() => return true,
            Ok(response) => {
                tracing::trace!(
                    url = %url,
                    status = %response.status(),
                    "HEAD inconclusive, retrying with ranged GET"
                );
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "HEAD probe failed");
                return false;
            }
        }

        // Some CDNs reject HEAD outright; ask for the first two bytes
        // instead and accept either a full or a partial-content response.
        match self
            .client
            .get(url)
            .header(header::RANGE, "bytes=0-1")
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status();
                let reachable = status == StatusCode::OK || status == StatusCode::PARTIAL_CONTENT;
                if !reachable {
                    tracing::trace!(url = %url, status = %status, "ranged GET not reachable");
                }
                reachable
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "ranged GET probe failed");
                false
            }
        }
    }
}
