//! Configuration types for ayah-audio

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Audio resolution configuration (hosts and probe timeouts)
///
/// Groups settings for the two audio networks and the per-probe timeouts.
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Primary audio network base URL, no trailing slash
    /// (default: "https://cdn.islamic.network")
    #[serde(default = "default_primary_host")]
    pub primary_host: String,

    /// Legacy audio network base URL, no trailing slash
    /// (default: "https://everyayah.com")
    #[serde(default = "default_legacy_host")]
    pub legacy_host: String,

    /// Connect timeout for a single probe in seconds (default: 5)
    #[serde(default = "default_probe_connect_timeout", with = "duration_serde")]
    pub probe_connect_timeout: Duration,

    /// Total timeout for a single probe in seconds (default: 8)
    ///
    /// Enforced per probe call, independent of any outer request timeout,
    /// so one hanging upstream cannot stall other in-flight resolutions.
    #[serde(default = "default_probe_timeout", with = "duration_serde")]
    pub probe_timeout: Duration,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            primary_host: default_primary_host(),
            legacy_host: default_legacy_host(),
            probe_connect_timeout: default_probe_connect_timeout(),
            probe_timeout: default_probe_timeout(),
        }
    }
}

/// Quran-text proxy configuration (upstream host and timeouts)
///
/// The text API is republished by simple forwarding; these settings name
/// the upstream and bound how long a passthrough request may take.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextProxyConfig {
    /// Upstream text API base URL, no trailing slash
    /// (default: "https://api.alquran.cloud/v1")
    #[serde(default = "default_text_base_url")]
    pub base_url: String,

    /// Connect timeout for upstream requests in seconds (default: 10)
    #[serde(default = "default_text_connect_timeout", with = "duration_serde")]
    pub connect_timeout: Duration,

    /// Total timeout for upstream requests in seconds (default: 20)
    #[serde(default = "default_text_timeout", with = "duration_serde")]
    pub timeout: Duration,
}

impl Default for TextProxyConfig {
    fn default() -> Self {
        Self {
            base_url: default_text_base_url(),
            connect_timeout: default_text_connect_timeout(),
            timeout: default_text_timeout(),
        }
    }
}

/// REST API server configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable CORS for browser access (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Enable Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: true,
        }
    }
}

/// Main configuration for the ayah-audio backend
///
/// Fields are organized into logical sub-configs:
/// - [`audio`](AudioConfig) — audio hosts, probe timeouts
/// - [`text`](TextProxyConfig) — upstream text API
/// - [`api`](ApiConfig) — bind address, CORS, Swagger UI
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Audio resolution settings
    #[serde(default)]
    pub audio: AudioConfig,

    /// Text proxy settings
    #[serde(default)]
    pub text: TextProxyConfig,

    /// API server settings
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Validate the configuration
    ///
    /// Checks that every configured host is an absolute http(s) URL
    /// without a trailing slash (candidate paths are appended verbatim)
    /// and that timeouts are non-zero.
    pub fn validate(&self) -> Result<()> {
        validate_host(&self.audio.primary_host, "audio.primary_host")?;
        validate_host(&self.audio.legacy_host, "audio.legacy_host")?;
        validate_host(&self.text.base_url, "text.base_url")?;

        validate_timeout(self.audio.probe_connect_timeout, "audio.probe_connect_timeout")?;
        validate_timeout(self.audio.probe_timeout, "audio.probe_timeout")?;
        validate_timeout(self.text.connect_timeout, "text.connect_timeout")?;
        validate_timeout(self.text.timeout, "text.timeout")?;

        Ok(())
    }
}

fn validate_host(host: &str, key: &str) -> Result<()> {
    if host.ends_with('/') {
        return Err(Error::Config {
            message: format!("host must not end with a slash: {host}"),
            key: Some(key.to_string()),
        });
    }

    let url = Url::parse(host).map_err(|e| Error::Config {
        message: format!("invalid host URL '{host}': {e}"),
        key: Some(key.to_string()),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::Config {
            message: format!("unsupported URL scheme '{scheme}' for host {host}"),
            key: Some(key.to_string()),
        }),
    }
}

fn validate_timeout(timeout: Duration, key: &str) -> Result<()> {
    if timeout.is_zero() {
        return Err(Error::Config {
            message: "timeout must be greater than zero".to_string(),
            key: Some(key.to_string()),
        });
    }
    Ok(())
}

fn default_primary_host() -> String {
    "https://cdn.islamic.network".to_string()
}

fn default_legacy_host() -> String {
    "https://everyayah.com".to_string()
}

fn default_probe_connect_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_probe_timeout() -> Duration {
    Duration::from_secs(8)
}

fn default_text_base_url() -> String {
    "https://api.alquran.cloud/v1".to_string()
}

fn default_text_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_text_timeout() -> Duration {
    Duration::from_secs(20)
}

// Parsing a literal address cannot fail
#[allow(clippy::expect_used)]
fn default_bind_address() -> SocketAddr {
    "127.0.0.1:8000"
        .parse()
        .expect("default bind address is valid")
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_true() -> bool {
    true
}

// Duration serialization helper (seconds as integers in config files)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
