// crates/core/src/heatmap.rs
//! Heatmap aggregation: fold practice sessions into per-day buckets.
//!
//! `aggregate()` is a pure function over its inputs — it never mutates a
//! session, reads nothing ambient, and returns a fresh collection on every
//! call. Buckets are created lazily: only dates with at least one qualifying
//! session appear in the output; the grid builder fills display gaps.

use std::collections::BTreeMap;

use chrono_tz::Tz;

use crate::timezone::format_date;
use crate::types::{
    ChordSession, DayBucket, DayStatus, DrawingSession, HeatmapTargets, ValidationThresholds,
};

/// Whether a chord drill counts toward the daily music target.
pub fn chord_qualifies(session: &ChordSession, thresholds: &ValidationThresholds) -> bool {
    session.config.duration_minutes >= thresholds.min_music_duration_minutes
}

/// Whether a drawing session counts toward the daily drawing target.
///
/// Unbounded-duration sessions never qualify, whatever their image count —
/// the habit count only rewards timed practice.
pub fn drawing_qualifies(session: &DrawingSession, thresholds: &ValidationThresholds) -> bool {
    if session.config.image_count < thresholds.min_drawing_refs {
        return false;
    }
    match session.config.duration.seconds() {
        Some(secs) => secs >= thresholds.min_drawing_duration_seconds,
        None => false,
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct DayCounters {
    music: u32,
    drawing: u32,
}

/// Aggregate sessions into day buckets, sorted ascending by date.
///
/// Each qualifying session increments the counter of the bucket for its
/// local calendar date in `tz`. Lexicographic order of the `YYYY-MM-DD`
/// date strings is chronological order, so the `BTreeMap` fold comes out
/// already sorted.
pub fn aggregate(
    chord_sessions: &[ChordSession],
    drawing_sessions: &[DrawingSession],
    thresholds: &ValidationThresholds,
    targets: &HeatmapTargets,
    tz: Tz,
) -> Vec<DayBucket> {
    let mut days: BTreeMap<String, DayCounters> = BTreeMap::new();

    for session in chord_sessions {
        if chord_qualifies(session, thresholds) {
            days.entry(format_date(session.timestamp, tz))
                .or_default()
                .music += 1;
        }
    }

    for session in drawing_sessions {
        if drawing_qualifies(session, thresholds) {
            days.entry(format_date(session.timestamp, tz))
                .or_default()
                .drawing += 1;
        }
    }

    days.into_iter()
        .map(|(date, counters)| DayBucket {
            status: DayStatus::from_counts(counters.music, counters.drawing, targets),
            date,
            music_sessions: counters.music,
            drawing_sessions: counters.drawing,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
