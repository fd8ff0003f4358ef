//! OpenAPI documentation and schema generation
//!
//! Defines the OpenAPI specification for the ayah-audio REST API using
//! utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the ayah-audio REST API
///
/// The spec can be accessed via:
/// - `/api/v1/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation (if enabled)
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ayah-audio REST API",
        version = "0.2.0",
        description = "Resolves playable Quran recitation audio URLs across unreliable hosting networks and republishes the upstream Quran-text API",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Audio resolution
        crate::api::routes::resolve_audio,

        // Quran text passthrough
        crate::api::routes::list_editions,
        crate::api::routes::list_audio_editions,
        crate::api::routes::list_surahs,
        crate::api::routes::get_surah,
        crate::api::routes::get_surah_arabic,
        crate::api::routes::get_ayah,

        // System
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        crate::api::routes::ResolveRequest,
        crate::resolver::Resolution,
        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "audio", description = "Audio URL resolution"),
        (name = "quran", description = "Quran text passthrough"),
        (name = "system", description = "Health and documentation"),
    )
)]
pub struct ApiDoc;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("/api/v1/audio/resolve"));
        assert!(json.contains("/api/v1/quran/surahs"));
        assert!(json.contains("ResolveRequest"));
    }
}
