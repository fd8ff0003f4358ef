//! Quran-text API passthrough
//!
//! Thin forwarding client for the upstream text API. No decision logic
//! lives here: each method maps one route to one upstream GET and returns
//! the upstream JSON as-is (the surah list additionally unwraps the
//! upstream response envelope). Upstream failures surface as gateway
//! errors carrying the upstream status.

use crate::config::TextProxyConfig;
use crate::error::{Error, Result};

/// Forwarding client for the upstream Quran-text API
#[derive(Debug, Clone)]
pub struct TextProxy {
    client: reqwest::Client,
    base_url: String,
}

impl TextProxy {
    /// Create a proxy client with timeouts from the text configuration
    pub fn new(config: &TextProxyConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// List all text editions
    pub async fn editions(&self) -> Result<serde_json::Value> {
        self.fetch("/edition").await
    }

    /// List audio editions
    pub async fn audio_editions(&self) -> Result<serde_json::Value> {
        self.fetch("/edition/format/audio").await
    }

    /// List all surahs
    ///
    /// The upstream wraps the list in a `data` envelope; it is unwrapped
    /// here so clients get the plain list.
    pub async fn surahs(&self) -> Result<serde_json::Value> {
        let mut response = self.fetch("/surah").await?;
        match response.get_mut("data") {
            Some(data) => Ok(data.take()),
            None => Ok(response),
        }
    }

    /// Fetch one surah in the given edition
    pub async fn surah(&self, number: u16, edition: &str) -> Result<serde_json::Value> {
        self.fetch(&format!("/surah/{number}/{edition}")).await
    }

    /// Fetch one ayah by global number in the given edition
    pub async fn ayah(&self, global_number: u32, edition: &str) -> Result<serde_json::Value> {
        self.fetch(&format!("/ayah/{global_number}/{edition}")).await
    }

    async fn fetch(&self, path: &str) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "forwarding to text upstream");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "text upstream returned an error");
            return Err(Error::Upstream {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToHttpStatus;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn proxy_for(server: &MockServer) -> TextProxy {
        let config = TextProxyConfig {
            base_url: server.uri(),
            connect_timeout: Duration::from_secs(1),
            timeout: Duration::from_secs(2),
        };
        TextProxy::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_editions_passthrough() {
        let server = MockServer::start().await;
        let body = json!({"code": 200, "data": [{"identifier": "en.asad"}]});
        Mock::given(method("GET"))
            .and(path("/edition"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let proxy = proxy_for(&server).await;
        let result = proxy.editions().await.unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_surahs_unwraps_data_envelope() {
        let server = MockServer::start().await;
        let body = json!({"code": 200, "data": [{"number": 1, "name": "الفاتحة"}]});
        Mock::given(method("GET"))
            .and(path("/surah"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let proxy = proxy_for(&server).await;
        let result = proxy.surahs().await.unwrap();
        assert_eq!(result, json!([{"number": 1, "name": "الفاتحة"}]));
    }

    #[tokio::test]
    async fn test_surah_builds_edition_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/surah/2/en.asad"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
            .mount(&server)
            .await;

        let proxy = proxy_for(&server).await;
        assert!(proxy.surah(2, "en.asad").await.is_ok());
    }

    #[tokio::test]
    async fn test_upstream_error_surfaces_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ayah/999999/en.asad"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let proxy = proxy_for(&server).await;
        let err = proxy.ayah(999_999, "en.asad").await.unwrap_err();
        match err {
            Error::Upstream { status, .. } => assert_eq!(status, 404),
            other => panic!("expected Upstream error, got {other:?}"),
        }
        // Gateway mapping for the API layer
        let err = proxy.ayah(999_999, "en.asad").await.unwrap_err();
        assert_eq!(err.status_code(), 502);
    }
}
