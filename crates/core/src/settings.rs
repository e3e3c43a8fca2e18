// crates/core/src/settings.rs
//! User settings: validation thresholds and the timezone offset.
//!
//! Settings are injected into the heatmap service as an explicit collaborator
//! (no ambient global store) and are re-read on every computation, so a
//! settings change takes effect on the next call without any cache to
//! invalidate.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::ValidationThresholds;

/// File holding the persisted settings object.
pub const SETTINGS_FILE: &str = "settings.json";

/// Provider of the current validation thresholds and timezone offset.
///
/// Implementations must return current values on every call — the service
/// never caches them across computations.
pub trait SettingsProvider {
    fn validation_thresholds(&self) -> ValidationThresholds;
    fn timezone_offset(&self) -> i32;
}

/// Persisted user settings (camelCase JSON written by the client).
///
/// Every field has a default so a partial document — or no document at
/// all — still yields usable settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Signed UTC offset in [-12, 12]; out-of-range values fall back to the
    /// default zone at resolution time.
    pub timezone_offset: i32,
    pub thresholds: ValidationThresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone_offset: 0,
            thresholds: ValidationThresholds::default(),
        }
    }
}

/// Settings provider backed by a JSON document in the data directory.
///
/// A missing file yields defaults silently; an unreadable or malformed file
/// yields defaults with a warning. Settings degradation must never block the
/// heatmap.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(SETTINGS_FILE),
        }
    }

    fn load(&self) -> Settings {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read settings, using defaults");
                return Settings::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed settings, using defaults");
                Settings::default()
            }
        }
    }
}

impl SettingsProvider for FileSettings {
    fn validation_thresholds(&self) -> ValidationThresholds {
        self.load().thresholds
    }

    fn timezone_offset(&self) -> i32 {
        self.load().timezone_offset
    }
}

/// Fixed in-memory settings for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings(pub Settings);

impl SettingsProvider for StaticSettings {
    fn validation_thresholds(&self) -> ValidationThresholds {
        self.0.thresholds
    }

    fn timezone_offset(&self) -> i32 {
        self.0.timezone_offset
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = FileSettings::new(dir.path());
        assert_eq!(settings.timezone_offset(), 0);
        assert_eq!(settings.validation_thresholds(), ValidationThresholds::default());
    }

    #[test]
    fn test_reads_persisted_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join(SETTINGS_FILE)).unwrap();
        file.write_all(
            br#"{
                "timezoneOffset": -6,
                "thresholds": { "minMusicDurationMinutes": 15, "minDrawingRefs": 4 }
            }"#,
        )
        .unwrap();

        let settings = FileSettings::new(dir.path());
        assert_eq!(settings.timezone_offset(), -6);
        let thresholds = settings.validation_thresholds();
        assert_eq!(thresholds.min_music_duration_minutes, 15);
        assert_eq!(thresholds.min_drawing_refs, 4);
        // Unspecified field keeps its default
        assert_eq!(thresholds.min_drawing_duration_seconds, 30);
    }

    #[test]
    fn test_malformed_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join(SETTINGS_FILE)).unwrap();
        file.write_all(b"{ not json").unwrap();

        let settings = FileSettings::new(dir.path());
        assert_eq!(settings.timezone_offset(), 0);
    }

    #[test]
    fn test_changes_visible_without_restart() {
        // The provider re-reads the file on every call
        let dir = tempfile::tempdir().unwrap();
        let settings = FileSettings::new(dir.path());
        assert_eq!(settings.timezone_offset(), 0);

        let mut file = fs::File::create(dir.path().join(SETTINGS_FILE)).unwrap();
        file.write_all(br#"{ "timezoneOffset": 9 }"#).unwrap();
        assert_eq!(settings.timezone_offset(), 9);
    }
}
