//! Static reciter catalog
//!
//! Maps a reciter key to its known audio sources: at most one short code on
//! the primary network (global-ayah-indexed paths) and an ordered list of
//! folder names on the legacy network (surah/ayah-indexed file names).
//! Folder order is trial order and is preserved as-is.

use std::collections::HashMap;

/// Audio sources known for a single reciter
///
/// An entry with no primary code and no legacy folders is valid: resolution
/// for such a reciter relies entirely on the shared fallback tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReciterEntry {
    /// Short code on the primary network (e.g. "ar.alafasy"), if any
    pub primary_code: Option<&'static str>,

    /// Legacy-network folder names, in trial order
    pub legacy_folders: &'static [&'static str],
}

impl ReciterEntry {
    const fn new(primary_code: Option<&'static str>, legacy_folders: &'static [&'static str]) -> Self {
        Self {
            primary_code,
            legacy_folders,
        }
    }
}

/// Known reciters and their audio sources
///
/// Some reciters appear under multiple legacy folder names because the same
/// recording set was uploaded more than once with spelling variants; every
/// variant that has been observed to serve files is listed.
const RECITERS: &[(&str, ReciterEntry)] = &[
    ("alafasy", ReciterEntry::new(Some("ar.alafasy"), &[])),
    (
        "sudais",
        ReciterEntry::new(
            Some("ar.sudais"),
            &["Abdurrahmaan_As-Sudais_192kbps", "Abdurrahmaan_As-Sudais_64kbps"],
        ),
    ),
    (
        "shuraim",
        ReciterEntry::new(Some("ar.shuraim"), &["Saood_ash-Shuraym_128kbps"]),
    ),
    (
        "abdullah-awad",
        ReciterEntry::new(Some("ar.juhany"), &["Abdullah_Al-Juhany_128kbps"]),
    ),
    (
        "ghamdi",
        ReciterEntry::new(Some("ar.ghamdi"), &["Saad_al-Ghamdi_128kbps"]),
    ),
    (
        "dosari",
        ReciterEntry::new(Some("ar.yasser"), &["Yasser_Ad-Dussary_128kbps"]),
    ),
    (
        "maher",
        ReciterEntry::new(
            Some("ar.maher"),
            &["Maher_AlMuaiqly_64kbps", "Maher_AlMuaiqly_128kbps"],
        ),
    ),
    (
        "hudhaify-ali",
        ReciterEntry::new(
            Some("ar.hudhaifi"),
            &["Hudhaify_128kbps", "Ali_Huzaifi_128kbps"],
        ),
    ),
    ("budair", ReciterEntry::new(Some("ar.budair"), &[])),
    (
        "abdul-basit",
        ReciterEntry::new(
            Some("ar.abdulbasit"),
            &["Abdul_Basit_Murattal_128kbps", "Abdul_Basit_Murattal_192kbps"],
        ),
    ),
    (
        "minshawi",
        ReciterEntry::new(Some("ar.minshawi"), &["Minshawi_Murattal_128kbps"]),
    ),
    (
        "hussary",
        ReciterEntry::new(None, &["Husary_128kbps", "Hussary_128kbps"]),
    ),
    (
        "mustafa-ismail",
        ReciterEntry::new(None, &["MustafaIsmail_128kbps", "Mustafa_Ismail_48kbps"]),
    ),
    (
        "ayyub",
        ReciterEntry::new(None, &["Muhammad_Ayyoub_128kbps", "Muhammad_Ayyub_128kbps"]),
    ),
    (
        "ajamy",
        ReciterEntry::new(
            None,
            &[
                "Ahmed_ibn_Ali_al-Ajmy_128kbps",
                "Ahmed_ibn_Ali_Al-Ajamy_64kbps",
                "Ajamy_128kbps",
            ],
        ),
    ),
    (
        "muhammad-rifat",
        ReciterEntry::new(None, &["Muhammad_Rifat_192kbps"]),
    ),
    (
        "mohamed-salamah",
        ReciterEntry::new(None, &["Muhammad_Salamah_128kbps"]),
    ),
    (
        "basfar",
        ReciterEntry::new(
            Some("ar.basfar"),
            &["Basfar_192kbps", "Abdullah_Basfar_192kbps"],
        ),
    ),
    (
        "bahtimi",
        ReciterEntry::new(
            None,
            &[
                "Kamel_Youssef_El-Bahtimi_128kbps",
                "Kamel_Youssef_El-Bahtimi_64kbps",
            ],
        ),
    ),
    (
        "abdulrahman-huthaify",
        ReciterEntry::new(Some("ar.hudhaifi"), &["Hudhaify_128kbps"]),
    ),
];

/// Immutable catalog of reciter audio sources
///
/// Built once at startup; lookups are O(1). An unknown key is not an error,
/// it yields the empty entry: a reciter with no catalogued sources still
/// resolves through the common-fallback and last-resort tiers.
#[derive(Debug, Clone)]
pub struct ReciterCatalog {
    entries: HashMap<&'static str, ReciterEntry>,
}

impl ReciterCatalog {
    /// Build the catalog from the built-in reciter table
    pub fn new() -> Self {
        Self {
            entries: RECITERS.iter().copied().collect(),
        }
    }

    /// Look up a reciter's audio sources
    ///
    /// Total function: unknown keys return the empty entry.
    pub fn lookup(&self, key: &str) -> ReciterEntry {
        self.entries.get(key).copied().unwrap_or_default()
    }

    /// Number of catalogued reciters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty (never true for the built-in table)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReciterCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_primary_only_reciter() {
        let catalog = ReciterCatalog::new();
        let entry = catalog.lookup("alafasy");
        assert_eq!(entry.primary_code, Some("ar.alafasy"));
        assert!(entry.legacy_folders.is_empty());
    }

    #[test]
    fn test_lookup_legacy_only_reciter() {
        let catalog = ReciterCatalog::new();
        let entry = catalog.lookup("hussary");
        assert_eq!(entry.primary_code, None);
        assert_eq!(entry.legacy_folders, &["Husary_128kbps", "Hussary_128kbps"]);
    }

    #[test]
    fn test_lookup_preserves_folder_order() {
        let catalog = ReciterCatalog::new();
        let entry = catalog.lookup("ajamy");
        assert_eq!(
            entry.legacy_folders,
            &[
                "Ahmed_ibn_Ali_al-Ajmy_128kbps",
                "Ahmed_ibn_Ali_Al-Ajamy_64kbps",
                "Ajamy_128kbps",
            ]
        );
    }

    #[test]
    fn test_lookup_unknown_key_yields_empty_entry() {
        let catalog = ReciterCatalog::new();
        let entry = catalog.lookup("unknown-key");
        assert_eq!(entry, ReciterEntry::default());
        assert_eq!(entry.primary_code, None);
        assert!(entry.legacy_folders.is_empty());
    }

    #[test]
    fn test_catalog_has_no_duplicate_keys() {
        let catalog = ReciterCatalog::new();
        // A duplicate key in the table would silently shadow an entry
        assert_eq!(catalog.len(), RECITERS.len());
    }
}
