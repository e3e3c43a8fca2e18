// crates/core/src/types.rs
//! Domain records for practice sessions and heatmap aggregation.
//!
//! Session records originate from the web client and persist as camelCase
//! JSON; the serde derives here round-trip that format exactly. Records are
//! immutable once created — nothing in this crate mutates a stored session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Duration of a drawing session: a finite number of seconds, or unbounded.
///
/// The client serializes unbounded ("no timer") sessions as the JSON string
/// `"inf"` and timed sessions as a plain number of seconds. Unbounded
/// sessions never count toward the daily habit target (intentional: the
/// habit tracker rewards timed practice).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingDuration {
    Seconds(u32),
    Unbounded,
}

impl DrawingDuration {
    /// Finite seconds, or `None` for unbounded.
    pub fn seconds(self) -> Option<u32> {
        match self {
            Self::Seconds(secs) => Some(secs),
            Self::Unbounded => None,
        }
    }
}

impl Serialize for DrawingDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Seconds(secs) => serializer.serialize_u32(*secs),
            Self::Unbounded => serializer.serialize_str("inf"),
        }
    }
}

impl<'de> Deserialize<'de> for DrawingDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(u32),
            Tag(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(secs) => Ok(Self::Seconds(secs)),
            Repr::Tag(tag) if tag == "inf" => Ok(Self::Unbounded),
            Repr::Tag(tag) => Err(serde::de::Error::custom(format!(
                "invalid drawing duration: {tag:?} (expected a number or \"inf\")"
            ))),
        }
    }
}

/// Configuration snapshot taken when a chord drill session was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordConfig {
    /// Required practice duration in minutes.
    pub duration_minutes: u32,
}

/// Outcome metrics of a chord drill. Not consulted by the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordOutcome {
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub correct: u32,
}

/// A completed chord drill session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSession {
    pub id: String,
    /// Creation instant, UTC-based. Calendar-day bucketing happens in the
    /// user's zone, not here.
    pub timestamp: DateTime<Utc>,
    pub config: ChordConfig,
    #[serde(default)]
    pub outcome: ChordOutcome,
}

/// Configuration snapshot taken when a figure-drawing session was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingConfig {
    /// Number of reference images in the session.
    pub image_count: u32,
    /// Per-image duration, or unbounded.
    pub duration: DrawingDuration,
}

/// Outcome metrics of a drawing session. Not consulted by the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingOutcome {
    #[serde(default)]
    pub completed_images: u32,
}

/// A completed figure-drawing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingSession {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub config: DrawingConfig,
    #[serde(default)]
    pub outcome: DrawingOutcome,
}

/// Minimums a session must meet to count toward the daily habit target.
///
/// Sourced from user settings (or defaults) and re-read on every aggregation
/// run so a settings change takes effect immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationThresholds {
    pub min_music_duration_minutes: u32,
    pub min_drawing_refs: u32,
    pub min_drawing_duration_seconds: u32,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            min_music_duration_minutes: 5,
            min_drawing_refs: 1,
            min_drawing_duration_seconds: 30,
        }
    }
}

/// Daily targets: how many qualifying sessions of each type mark a day
/// "complete" for that activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeatmapTargets {
    pub music: u32,
    pub drawing: u32,
}

impl Default for HeatmapTargets {
    fn default() -> Self {
        Self {
            music: 2,
            drawing: 2,
        }
    }
}

/// Completion status of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    None,
    Music,
    Drawing,
    Both,
}

impl DayStatus {
    /// Derive the status from qualifying-session counts and daily targets.
    ///
    /// `Both` iff both counters meet their targets; `Music`/`Drawing` iff
    /// exactly one does; `None` otherwise.
    pub fn from_counts(music: u32, drawing: u32, targets: &HeatmapTargets) -> Self {
        match (music >= targets.music, drawing >= targets.drawing) {
            (true, true) => Self::Both,
            (true, false) => Self::Music,
            (false, true) => Self::Drawing,
            (false, false) => Self::None,
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Music => "music",
            Self::Drawing => "drawing",
            Self::Both => "both",
        };
        f.write_str(s)
    }
}

/// Derived aggregate of qualifying-session counts for one calendar date.
///
/// Never persisted — recomputed on every request so the heatmap is always a
/// pure function of the stored sessions plus the current thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    /// Calendar date in `YYYY-MM-DD` form, local to the user's zone.
    pub date: String,
    pub music_sessions: u32,
    pub drawing_sessions: u32,
    pub status: DayStatus,
}

impl DayBucket {
    /// An all-zero bucket for a date with no qualifying sessions.
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            music_sessions: 0,
            drawing_sessions: 0,
            status: DayStatus::None,
        }
    }
}

/// A month label for the calendar grid: short month name plus the week
/// column it belongs above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLabel {
    pub month: String,
    pub column: usize,
}

// ============================================================================
// Tests
// ============================================================================
