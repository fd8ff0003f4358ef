//! REST API server module
//!
//! Provides the HTTP surface of the backend: the audio resolution
//! endpoint, the Quran-text passthrough routes, health, and OpenAPI
//! documentation.

use crate::{Config, Result, resolver::AudioResolver, text_proxy::TextProxy};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

/// Create the API router with all route definitions
///
/// # Routes
///
/// ## Audio
/// - `POST /api/v1/audio/resolve` - Resolve a playable audio URL
///
/// ## Quran text (passthrough)
/// - `GET /api/v1/quran/editions` - List text editions
/// - `GET /api/v1/quran/editions/audio` - List audio editions
/// - `GET /api/v1/quran/surahs` - List surahs
/// - `GET /api/v1/quran/surah/:number` - Get surah (translation edition)
/// - `GET /api/v1/quran/surah/:number/arabic` - Get surah (Arabic edition)
/// - `GET /api/v1/quran/ayah/:number` - Get ayah by global number
///
/// ## System
/// - `GET /api/v1/health` - Health check
/// - `GET /api/v1/openapi.json` - OpenAPI specification
/// - `GET /swagger-ui` - Interactive Swagger UI documentation (if enabled)
pub fn create_router(
    resolver: Arc<AudioResolver>,
    text_proxy: Arc<TextProxy>,
    config: Arc<Config>,
) -> Router {
    let state = AppState::new(resolver, text_proxy, config.clone());

    let api = Router::new()
        // Audio resolution
        .route("/audio/resolve", post(routes::resolve_audio))
        // Quran text passthrough
        .route("/quran/editions", get(routes::list_editions))
        .route("/quran/editions/audio", get(routes::list_audio_editions))
        .route("/quran/surahs", get(routes::list_surahs))
        .route("/quran/surah/:number", get(routes::get_surah))
        .route("/quran/surah/:number/arabic", get(routes::get_surah_arabic))
        .route("/quran/ayah/:number", get(routes::get_ayah))
        // System
        .route("/health", get(routes::health_check));

    // SwaggerUi's `.url()` serves the spec at this path itself; register
    // the plain handler only when the UI is off so the route is not
    // claimed twice (axum panics on overlapping method routes).
    let api = if config.api.swagger_ui {
        api
    } else {
        api.route("/openapi.json", get(routes::openapi_spec))
    };

    let router = Router::new().nest("/api/v1", api);

    // Merge Swagger UI routes if enabled in config (before applying state)
    let router = if config.api.swagger_ui {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api/v1/openapi.json", ApiDoc::openapi()))
    } else {
        router
    };

    let router = router
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Apply CORS middleware if enabled in config
    if config.api.cors_enabled {
        let cors = build_cors_layer(&config.api.cors_origins);
        router.layer(cors)
    } else {
        router
    }
}

/// Build a CORS layer based on configured origins
///
/// `origins` supports "*" for any origin; an empty list also allows any
/// origin (the default for local development).
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_any = origins.iter().any(|o| o == "*");

    if allow_any || origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the API server on the configured bind address.
///
/// Builds the resolver and text proxy from the configuration, binds a TCP
/// listener, and serves the router until shutdown.
pub async fn start_api_server(config: Arc<Config>) -> Result<()> {
    let bind_address = config.api.bind_address;

    let resolver = Arc::new(AudioResolver::new(config.audio.clone())?);
    let text_proxy = Arc::new(TextProxy::new(&config.text)?);

    tracing::info!(
        address = %bind_address,
        "Starting API server"
    );

    let app = create_router(resolver, text_proxy, config);

    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(crate::error::Error::Io)?;

    tracing::info!(
        address = %bind_address,
        "API server listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::Error::ApiServer(e.to_string()))?;

    tracing::info!("API server stopped");
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
