//! Audio resolution handler.

use crate::api::AppState;
use crate::candidates::{Bitrate, VerseRef};
use crate::error::{Error, Result};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for audio URL resolution
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ResolveRequest {
    /// Reciter key (unknown keys are legal and resolve through fallbacks)
    pub reciter_key: String,

    /// Requested bitrate; anything other than "64" or "128" is treated as "128"
    #[serde(default = "default_bitrate")]
    pub bitrate: String,

    /// Surah number (1-114)
    pub surah: i64,

    /// Ayah number within the surah (1-based)
    pub ayah_in_surah: i64,

    /// Sequential ayah index across the whole text (1-based)
    pub global_ayah: i64,
}

fn default_bitrate() -> String {
    "128".to_string()
}

/// Range-check the coordinates before they reach the resolver
///
/// The resolver trusts its input, so rejection has to happen here at the
/// boundary. The checks also make the casts below lossless.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn validate(request: &ResolveRequest) -> Result<VerseRef> {
    if !(1..=114).contains(&request.surah) {
        return Err(Error::Validation {
            message: "surah must be between 1 and 114".to_string(),
            field: Some("surah".to_string()),
        });
    }
    if !(1..=999).contains(&request.ayah_in_surah) {
        return Err(Error::Validation {
            message: "ayah_in_surah must be between 1 and 999".to_string(),
            field: Some("ayah_in_surah".to_string()),
        });
    }
    if request.global_ayah < 1 || request.global_ayah > i64::from(u32::MAX) {
        return Err(Error::Validation {
            message: "global_ayah must be a positive ayah index".to_string(),
            field: Some("global_ayah".to_string()),
        });
    }

    Ok(VerseRef {
        surah: request.surah as u16,
        ayah: request.ayah_in_surah as u16,
        global_ayah: request.global_ayah as u32,
    })
}

/// POST /audio/resolve - Resolve a playable audio URL
///
/// Always answers 200 with a URL for well-formed coordinates; the resolver
/// has no "not found" outcome. Out-of-range coordinates get a 422.
#[utoipa::path(
    post,
    path = "/api/v1/audio/resolve",
    tag = "audio",
    request_body = ResolveRequest,
    responses(
        (status = 200, description = "A playable (best-effort) audio URL", body = crate::resolver::Resolution),
        (status = 422, description = "Coordinates out of range", body = crate::error::ApiError)
    )
)]
pub async fn resolve_audio(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Result<impl IntoResponse> {
    let verse = validate(&request)?;
    let bitrate = Bitrate::parse(&request.bitrate);

    let resolution = state
        .resolver
        .resolve(&request.reciter_key, bitrate, verse)
        .await;

    Ok((StatusCode::OK, Json(resolution)))
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn request(surah: i64, ayah: i64, global: i64) -> ResolveRequest {
        ResolveRequest {
            reciter_key: "alafasy".to_string(),
            bitrate: "128".to_string(),
            surah,
            ayah_in_surah: ayah,
            global_ayah: global,
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(validate(&request(1, 1, 1)).is_ok());
        assert!(validate(&request(114, 6, 6236)).is_ok());
    }

    #[test]
    fn test_validate_rejects_surah_out_of_range() {
        assert!(validate(&request(0, 1, 1)).is_err());
        assert!(validate(&request(115, 1, 1)).is_err());
        assert!(validate(&request(-3, 1, 1)).is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_ayah() {
        assert!(validate(&request(2, 0, 8)).is_err());
        assert!(validate(&request(2, -5, 8)).is_err());
    }

    #[test]
    fn test_validate_rejects_four_digit_ayah() {
        // The legacy URL pattern is fixed at 3-digit zero-padding; wider
        // values must not reach the generator.
        assert!(validate(&request(2, 1000, 8)).is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_global_ayah() {
        assert!(validate(&request(2, 5, 0)).is_err());
        assert!(validate(&request(2, 5, -1)).is_err());
    }

    #[test]
    fn test_default_bitrate_is_128() {
        let body = r#"{"reciter_key":"alafasy","surah":2,"ayah_in_surah":5,"global_ayah":12}"#;
        let request: ResolveRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.bitrate, "128");
    }
}
