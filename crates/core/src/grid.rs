// crates/core/src/grid.rs
//! Calendar grid for heatmap display: a Sunday-aligned 53×7 week grid
//! covering one calendar year, plus month labels for the column header.
//!
//! The grid is a fixed 371 dates regardless of leap years; trailing entries
//! may spill into the next year. That is intentional — the display is a
//! fixed-size grid and the renderer dims out-of-range cells.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::types::MonthLabel;

/// Weeks (columns) in the display grid.
pub const GRID_WEEKS: usize = 53;
/// Total dates in the display grid.
pub const GRID_DAYS: usize = GRID_WEEKS * 7;

/// Build the 371-date grid for the calendar year containing `reference`.
///
/// The year is determined in `tz` (an instant near midnight UTC can belong
/// to the previous local year). The grid starts at the Sunday on or before
/// January 1 and walks forward day by day, so index 0 is always a Sunday
/// and `index / 7` is the week column.
pub fn build_year_grid(tz: Tz, reference: DateTime<Utc>) -> Vec<String> {
    let year = reference.with_timezone(&tz).year();
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).expect("January 1 exists for every year");
    let start = jan1 - Duration::days(i64::from(jan1.weekday().num_days_from_sunday()));

    start
        .iter_days()
        .take(GRID_DAYS)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect()
}

/// One label per calendar month in the grid, placed at the first column
/// whose date falls on days 1–7 of that month (the first week substantially
/// inside the month). A grid that spills into the next January yields a
/// trailing 13th label.
pub fn month_labels(grid: &[String]) -> Vec<MonthLabel> {
    let mut labels = Vec::with_capacity(13);
    let mut last_labeled: Option<(i32, u32)> = None;

    for (index, raw) in grid.iter().enumerate() {
        let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
            continue;
        };
        if date.day() > 7 {
            continue;
        }
        let key = (date.year(), date.month());
        if last_labeled == Some(key) {
            continue;
        }
        last_labeled = Some(key);
        labels.push(MonthLabel {
            month: date.format("%b").to_string(),
            column: index / 7,
        });
    }

    labels
}

// ============================================================================
// Tests
// ============================================================================
