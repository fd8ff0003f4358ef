//! Router-level tests for the Quran-text passthrough endpoints.

use super::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_surahs_passthrough_unwraps_envelope() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/surah"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 200, "data": [{"number": 1}]})),
        )
        .mount(&upstream)
        .await;

    let router = test_router(
        audio_config("http://127.0.0.1:1", "http://127.0.0.1:1"),
        text_config(&upstream.uri()),
    );

    let request = Request::builder()
        .uri("/api/v1/quran/surahs")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!([{"number": 1}]));
}

#[tokio::test]
async fn test_surah_edition_query_forwarded() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/surah/2/quran-uthmani"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .mount(&upstream)
        .await;

    let router = test_router(
        audio_config("http://127.0.0.1:1", "http://127.0.0.1:1"),
        text_config(&upstream.uri()),
    );

    let request = Request::builder()
        .uri("/api/v1/quran/surah/2?edition=quran-uthmani")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_arabic_route_defaults_to_uthmani_edition() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/surah/36/quran-uthmani"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .mount(&upstream)
        .await;

    let router = test_router(
        audio_config("http://127.0.0.1:1", "http://127.0.0.1:1"),
        text_config(&upstream.uri()),
    );

    let request = Request::builder()
        .uri("/api/v1/quran/surah/36/arabic")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_502() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/edition"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let router = test_router(
        audio_config("http://127.0.0.1:1", "http://127.0.0.1:1"),
        text_config(&upstream.uri()),
    );

    let request = Request::builder()
        .uri("/api/v1/quran/editions")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "upstream_error");
    assert_eq!(body["error"]["details"]["status"], 500);
}

#[tokio::test]
async fn test_unreachable_upstream_maps_to_502() {
    // Dead port: transport error rather than an HTTP error status
    let router = test_router(
        audio_config("http://127.0.0.1:1", "http://127.0.0.1:1"),
        text_config("http://127.0.0.1:1"),
    );

    let request = Request::builder()
        .uri("/api/v1/quran/editions")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "upstream_unreachable");
}

#[tokio::test]
async fn test_ayah_custom_edition() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ayah/262/ar.alafasy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .mount(&upstream)
        .await;

    let router = test_router(
        audio_config("http://127.0.0.1:1", "http://127.0.0.1:1"),
        text_config(&upstream.uri()),
    );

    let request = Request::builder()
        .uri("/api/v1/quran/ayah/262?edition=ar.alafasy")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
