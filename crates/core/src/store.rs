// crates/core/src/store.rs
//! Persisted session access.
//!
//! The web client keeps each session type as one JSON array; the Rust side
//! reads those documents from a data directory. A missing file is a fresh
//! install, not an error — it loads as an empty collection.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::StoreError;
use crate::types::{ChordSession, DrawingSession};

/// File holding the chord drill session array.
pub const CHORD_SESSIONS_FILE: &str = "chord-sessions.json";
/// File holding the drawing session array.
pub const DRAWING_SESSIONS_FILE: &str = "drawing-sessions.json";

/// Source of persisted practice sessions.
pub trait SessionStore {
    fn music_sessions(&self) -> Result<Vec<ChordSession>, StoreError>;
    fn drawing_sessions(&self) -> Result<Vec<DrawingSession>, StoreError>;
}

/// Default data directory (`<platform data dir>/practicegrid`).
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("practicegrid"))
}

/// Session store backed by JSON documents in a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.dir.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "session file missing, loading as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };
        let sessions: Vec<T> =
            serde_json::from_str(&raw).map_err(|e| StoreError::json(&path, e))?;
        debug!(path = %path.display(), count = sessions.len(), "loaded sessions");
        Ok(sessions)
    }
}

impl SessionStore for JsonFileStore {
    fn music_sessions(&self) -> Result<Vec<ChordSession>, StoreError> {
        self.load(CHORD_SESSIONS_FILE)
    }

    fn drawing_sessions(&self) -> Result<Vec<DrawingSession>, StoreError> {
        self.load(DRAWING_SESSIONS_FILE)
    }
}

/// In-memory session store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub music: Vec<ChordSession>,
    pub drawing: Vec<DrawingSession>,
}

impl SessionStore for MemoryStore {
    fn music_sessions(&self) -> Result<Vec<ChordSession>, StoreError> {
        Ok(self.music.clone())
    }

    fn drawing_sessions(&self) -> Result<Vec<DrawingSession>, StoreError> {
        Ok(self.drawing.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DrawingDuration;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_file(dir: &std::path::Path, name: &str, contents: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_missing_files_load_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.music_sessions().unwrap(), vec![]);
        assert_eq!(store.drawing_sessions().unwrap(), vec![]);
    }

    #[test]
    fn test_loads_chord_sessions_from_client_json() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            CHORD_SESSIONS_FILE,
            r#"[
                {
                    "id": "cs-1",
                    "timestamp": "2024-03-05T09:00:00Z",
                    "config": { "durationMinutes": 10 },
                    "outcome": { "attempts": 12, "correct": 11 }
                },
                {
                    "id": "cs-2",
                    "timestamp": "2024-03-05T19:00:00Z",
                    "config": { "durationMinutes": 10 }
                }
            ]"#,
        );
        let store = JsonFileStore::new(dir.path());
        let sessions = store.music_sessions().unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].id, "cs-1");
        assert_eq!(sessions[1].config.duration_minutes, 10);
    }

    #[test]
    fn test_loads_drawing_sessions_with_inf_duration() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            DRAWING_SESSIONS_FILE,
            r#"[
                {
                    "id": "ds-1",
                    "timestamp": "2024-03-06T09:00:00Z",
                    "config": { "imageCount": 12, "duration": "inf" }
                },
                {
                    "id": "ds-2",
                    "timestamp": "2024-03-06T10:00:00Z",
                    "config": { "imageCount": 6, "duration": 60 }
                }
            ]"#,
        );
        let store = JsonFileStore::new(dir.path());
        let sessions = store.drawing_sessions().unwrap();
        assert_eq!(sessions[0].config.duration, DrawingDuration::Unbounded);
        assert_eq!(sessions[1].config.duration, DrawingDuration::Seconds(60));
    }

    #[test]
    fn test_malformed_json_reports_path_and_line() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), CHORD_SESSIONS_FILE, "[\n {\"id\": }\n]");
        let store = JsonFileStore::new(dir.path());
        let err = store.music_sessions().unwrap_err();
        match err {
            StoreError::MalformedJson { path, line, .. } => {
                assert!(path.ends_with(CHORD_SESSIONS_FILE));
                assert_eq!(line, 2);
            }
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore {
            music: vec![],
            drawing: vec![],
        };
        assert_eq!(store.music_sessions().unwrap(), vec![]);
        assert_eq!(store.drawing_sessions().unwrap(), vec![]);
    }
}
