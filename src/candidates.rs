//! Candidate URL generation
//!
//! Produces the ordered sequence of audio URLs to try for one verse, lazily
//! and without touching the network. Four tiers, highest priority first:
//!
//! 1. The reciter's primary-network URL, if it has a code there.
//! 2. The reciter's legacy-network folders, in catalog order.
//! 3. A fixed list of widely mirrored legacy folders shared by many
//!    reciters, as a catch-all for incomplete catalog entries.
//! 4. A last-resort primary-network URL for a reciter mirrored everywhere;
//!    never probed, returned as-is when everything else fails.
//!
//! Generation is pure, so tier content and ordering are unit-testable;
//! probing lives in [`crate::probe`].

use crate::catalog::ReciterEntry;
use crate::config::AudioConfig;

/// Audio bitrate on the primary network
///
/// The primary network publishes 64 and 128 kbps sets. Anything else a
/// client asks for is normalized to 128 rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Bitrate {
    /// 64 kbps
    Kbps64,
    /// 128 kbps
    #[default]
    Kbps128,
}

impl Bitrate {
    /// Parse a client-supplied bitrate string
    ///
    /// Total: any value other than `"64"` or `"128"` yields 128 kbps.
    pub fn parse(value: &str) -> Self {
        match value {
            "64" => Self::Kbps64,
            _ => Self::Kbps128,
        }
    }

    /// The URL path segment for this bitrate
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kbps64 => "64",
            Self::Kbps128 => "128",
        }
    }
}

/// Coordinates of one verse
///
/// Carries both addressing schemes in use across the audio networks: the
/// per-surah pair and the global sequential index. The two are not
/// cross-validated here; callers are trusted to supply a consistent triple
/// (the HTTP boundary range-checks them before they reach this layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRef {
    /// Surah number (1-114)
    pub surah: u16,

    /// Ayah number within the surah (1-based)
    pub ayah: u16,

    /// Sequential ayah index across the whole text (1-based)
    pub global_ayah: u32,
}

/// Legacy folders shared by many reciters, used as a catch-all tier
///
/// Deliberately not deduplicated against individual catalog entries: a
/// folder already tried in the legacy tier gets a second pass here, and
/// trial order is observable behavior.
pub const COMMON_FOLDERS: &[&str] = &[
    "Saad_al-Ghamdi_128kbps",
    "Abdurrahmaan_As-Sudais_192kbps",
    "Saood_ash-Shuraym_128kbps",
    "Minshawi_Murattal_128kbps",
    "Husary_128kbps",
    "Ahmed_ibn_Ali_al-Ajmy_128kbps",
];

/// Primary-network code used for the unprobed last-resort URL
pub const LAST_RESORT_CODE: &str = "ar.alafasy";

/// Build a primary-network URL: `{host}/quran/audio/{bitrate}/{code}/{global_ayah}.mp3`
fn primary_url(host: &str, bitrate: Bitrate, code: &str, global_ayah: u32) -> String {
    format!(
        "{}/quran/audio/{}/{}/{}.mp3",
        host,
        bitrate.as_str(),
        code,
        global_ayah
    )
}

/// Build a legacy-network URL: `{host}/data/{folder}/{sss}{aaa}.mp3`
///
/// Surah and ayah are zero-padded to 3 digits each. Values needing more
/// digits are a boundary-validation concern, not guarded here.
fn legacy_url(host: &str, folder: &str, verse: VerseRef) -> String {
    format!(
        "{}/data/{}/{:03}{:03}.mp3",
        host, folder, verse.surah, verse.ayah
    )
}

/// The ordered, lazy sequence of probeable candidate URLs (tiers 1-3)
///
/// The last-resort URL (tier 4) is not part of this sequence because it is
/// never probed; see [`last_resort_url`].
pub fn candidate_urls<'a>(
    config: &'a AudioConfig,
    entry: ReciterEntry,
    bitrate: Bitrate,
    verse: VerseRef,
) -> impl Iterator<Item = String> + 'a {
    let primary = entry
        .primary_code
        .map(|code| primary_url(&config.primary_host, bitrate, code, verse.global_ayah));

    let legacy = entry
        .legacy_folders
        .iter()
        .map(move |folder| legacy_url(&config.legacy_host, folder, verse));

    let common = COMMON_FOLDERS
        .iter()
        .map(move |folder| legacy_url(&config.legacy_host, folder, verse));

    primary.into_iter().chain(legacy).chain(common)
}

/// The guaranteed fallback URL returned when no candidate is reachable
pub fn last_resort_url(config: &AudioConfig, bitrate: Bitrate, global_ayah: u32) -> String {
    primary_url(&config.primary_host, bitrate, LAST_RESORT_CODE, global_ayah)
}
