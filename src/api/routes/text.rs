//! Quran-text passthrough handlers.
//!
//! Each handler forwards one route to the upstream text API through
//! [`crate::text_proxy::TextProxy`]; upstream failures convert to 502
//! responses via the error machinery.

use crate::api::AppState;
use crate::error::Result;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

/// Optional edition selector for text routes
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct EditionQuery {
    /// Text edition identifier (e.g. "en.asad", "quran-uthmani")
    pub edition: Option<String>,
}

/// GET /quran/editions - List all text editions
#[utoipa::path(
    get,
    path = "/api/v1/quran/editions",
    tag = "quran",
    responses(
        (status = 200, description = "Upstream edition list, forwarded verbatim"),
        (status = 502, description = "Upstream error", body = crate::error::ApiError)
    )
)]
pub async fn list_editions(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.text_proxy.editions().await?))
}

/// GET /quran/editions/audio - List audio editions
#[utoipa::path(
    get,
    path = "/api/v1/quran/editions/audio",
    tag = "quran",
    responses(
        (status = 200, description = "Upstream audio edition list, forwarded verbatim"),
        (status = 502, description = "Upstream error", body = crate::error::ApiError)
    )
)]
pub async fn list_audio_editions(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.text_proxy.audio_editions().await?))
}

/// GET /quran/surahs - List all surahs
#[utoipa::path(
    get,
    path = "/api/v1/quran/surahs",
    tag = "quran",
    responses(
        (status = 200, description = "Plain surah list (upstream envelope unwrapped)"),
        (status = 502, description = "Upstream error", body = crate::error::ApiError)
    )
)]
pub async fn list_surahs(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.text_proxy.surahs().await?))
}

/// GET /quran/surah/:number - Get a surah in a translation edition
#[utoipa::path(
    get,
    path = "/api/v1/quran/surah/{number}",
    tag = "quran",
    params(
        ("number" = u16, Path, description = "Surah number"),
        EditionQuery
    ),
    responses(
        (status = 200, description = "Surah text in the requested edition"),
        (status = 502, description = "Upstream error", body = crate::error::ApiError)
    )
)]
pub async fn get_surah(
    State(state): State<AppState>,
    Path(number): Path<u16>,
    Query(query): Query<EditionQuery>,
) -> Result<Json<serde_json::Value>> {
    let edition = query.edition.as_deref().unwrap_or("en.asad");
    Ok(Json(state.text_proxy.surah(number, edition).await?))
}

/// GET /quran/surah/:number/arabic - Get a surah in an Arabic edition
#[utoipa::path(
    get,
    path = "/api/v1/quran/surah/{number}/arabic",
    tag = "quran",
    params(
        ("number" = u16, Path, description = "Surah number"),
        EditionQuery
    ),
    responses(
        (status = 200, description = "Surah text in the requested Arabic edition"),
        (status = 502, description = "Upstream error", body = crate::error::ApiError)
    )
)]
pub async fn get_surah_arabic(
    State(state): State<AppState>,
    Path(number): Path<u16>,
    Query(query): Query<EditionQuery>,
) -> Result<Json<serde_json::Value>> {
    let edition = query.edition.as_deref().unwrap_or("quran-uthmani");
    Ok(Json(state.text_proxy.surah(number, edition).await?))
}

/// GET /quran/ayah/:number - Get one ayah by global number
#[utoipa::path(
    get,
    path = "/api/v1/quran/ayah/{number}",
    tag = "quran",
    params(
        ("number" = u32, Path, description = "Global ayah number"),
        EditionQuery
    ),
    responses(
        (status = 200, description = "Ayah text in the requested edition"),
        (status = 502, description = "Upstream error", body = crate::error::ApiError)
    )
)]
pub async fn get_ayah(
    State(state): State<AppState>,
    Path(number): Path<u32>,
    Query(query): Query<EditionQuery>,
) -> Result<Json<serde_json::Value>> {
    let edition = query.edition.as_deref().unwrap_or("en.asad");
    Ok(Json(state.text_proxy.ayah(number, edition).await?))
}
