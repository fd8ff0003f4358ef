use super::*;
use crate::config::{AudioConfig, TextProxyConfig};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::time::Duration;
use tower::ServiceExt;

mod text;

/// Build a router whose audio hosts and text upstream point wherever the
/// test wants (usually a wiremock server).
fn test_router(audio: AudioConfig, text: TextProxyConfig) -> Router {
    let config = Arc::new(Config {
        audio: audio.clone(),
        text: text.clone(),
        ..Config::default()
    });
    let resolver = Arc::new(AudioResolver::new(audio).unwrap());
    let text_proxy = Arc::new(TextProxy::new(&text).unwrap());
    create_router(resolver, text_proxy, config)
}

/// Audio config with short probe timeouts pointed at the given hosts
fn audio_config(primary_host: &str, legacy_host: &str) -> AudioConfig {
    AudioConfig {
        primary_host: primary_host.to_string(),
        legacy_host: legacy_host.to_string(),
        probe_connect_timeout: Duration::from_secs(1),
        probe_timeout: Duration::from_secs(2),
    }
}

fn text_config(base_url: &str) -> TextProxyConfig {
    TextProxyConfig {
        base_url: base_url.to_string(),
        connect_timeout: Duration::from_secs(1),
        timeout: Duration::from_secs(2),
    }
}

/// POST a JSON body to the router and return the response
async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    router.oneshot(request).await.unwrap()
}

/// Read a JSON response body
async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_cors_enabled_by_default() {
    let router = test_router(
        audio_config("http://127.0.0.1:1", "http://127.0.0.1:1"),
        text_config("http://127.0.0.1:1"),
    );

    let request = Request::builder()
        .uri("/api/v1/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().contains_key("access-control-allow-origin"),
        "CORS header should be present when CORS is enabled"
    );
}

#[tokio::test]
async fn test_cors_disabled_omits_headers() {
    let mut config = Config::default();
    config.api.cors_enabled = false;
    config.audio = audio_config("http://127.0.0.1:1", "http://127.0.0.1:1");
    config.text = text_config("http://127.0.0.1:1");

    let resolver = Arc::new(AudioResolver::new(config.audio.clone()).unwrap());
    let text_proxy = Arc::new(TextProxy::new(&config.text).unwrap());
    let router = create_router(resolver, text_proxy, Arc::new(config));

    let request = Request::builder()
        .uri("/api/v1/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        !response.headers().contains_key("access-control-allow-origin"),
        "CORS header should be absent when CORS is disabled"
    );
}

#[tokio::test]
async fn test_api_server_spawns() {
    let mut config = Config::default();
    // Port 0 = OS assigns a free port
    config.api.bind_address = "127.0.0.1:0".parse().unwrap();
    let config = Arc::new(config);

    let api_handle = tokio::spawn({
        let config = config.clone();
        async move { start_api_server(config).await }
    });

    // Give it a moment to start; a construction panic or bind error
    // finishes the task and must fail the test instead of being
    // silently aborted.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!api_handle.is_finished(), "server task exited during startup");

    api_handle.abort();
}
