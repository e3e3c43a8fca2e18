// crates/cli/src/render.rs
//! Terminal rendering of the year grid: one row per weekday, one column per
//! week, GitHub-style colored cells, month labels across the top.

use std::collections::HashMap;

use practicegrid_core::{DayBucket, DayStatus, MonthLabel};

/// Cell width in characters (glyph + spacer).
const CELL_WIDTH: usize = 2;

const WEEKDAY_GUTTER: usize = 4;
const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn cell(status: Option<DayStatus>, in_year: bool) -> &'static str {
    if !in_year {
        return "  ";
    }
    match status {
        None | Some(DayStatus::None) => "\x1b[38;5;238m■\x1b[0m ",
        Some(DayStatus::Music) => "\x1b[38;5;42m■\x1b[0m ",
        Some(DayStatus::Drawing) => "\x1b[38;5;33m■\x1b[0m ",
        Some(DayStatus::Both) => "\x1b[38;5;214m■\x1b[0m ",
    }
}

/// Render the full year view: month labels, 7 weekday rows, and a legend.
///
/// `dates` is the 371-entry display grid; `buckets` the aggregated days.
/// Dates outside the grid's target year render as blanks (the fixed-size
/// grid pads with the previous December and the next January).
pub fn render_year(dates: &[String], buckets: &[DayBucket], labels: &[MonthLabel]) -> String {
    let by_date: HashMap<&str, DayStatus> = buckets
        .iter()
        .map(|bucket| (bucket.date.as_str(), bucket.status))
        .collect();

    // dates[7] is always inside the target year: the grid starts at most six
    // days before January 1.
    let year = dates.get(7).map(|d| &d[..4]).unwrap_or_default();

    let mut out = String::new();
    out.push_str(&month_label_row(labels, dates.len().div_ceil(7)));
    out.push('\n');

    for weekday in 0..7 {
        let mut row = format!("{name:<width$}", name = WEEKDAY_NAMES[weekday], width = WEEKDAY_GUTTER);
        for week in 0..dates.len() / 7 {
            let date = &dates[week * 7 + weekday];
            let in_year = date.starts_with(year);
            row.push_str(cell(by_date.get(date.as_str()).copied(), in_year));
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!(
        "{}none  {}music  {}drawing  {}both\n",
        cell(Some(DayStatus::None), true),
        cell(Some(DayStatus::Music), true),
        cell(Some(DayStatus::Drawing), true),
        cell(Some(DayStatus::Both), true),
    ));
    out
}

fn month_label_row(labels: &[MonthLabel], weeks: usize) -> String {
    let mut row = vec![b' '; WEEKDAY_GUTTER + weeks * CELL_WIDTH];
    for label in labels {
        let start = WEEKDAY_GUTTER + label.column * CELL_WIDTH;
        for (i, byte) in label.month.bytes().enumerate() {
            if start + i < row.len() {
                row[start + i] = byte;
            }
        }
    }
    String::from_utf8(row).unwrap_or_default().trim_end().to_string()
}

/// One-line summary of a single day bucket.
pub fn format_bucket(bucket: &DayBucket) -> String {
    format!(
        "{}  music: {}  drawing: {}  status: {}",
        bucket.date, bucket.music_sessions, bucket.drawing_sessions, bucket.status
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use practicegrid_core::{build_year_grid, month_labels};

    fn grid_2024() -> Vec<String> {
        build_year_grid(
            practicegrid_core::resolve_timezone(0),
            "2024-06-01T00:00:00Z".parse().unwrap(),
        )
    }

    #[test]
    fn test_render_year_has_label_row_and_seven_weekday_rows() {
        let dates = grid_2024();
        let labels = month_labels(&dates);
        let output = render_year(&dates, &[], &labels);

        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("Jan"));
        assert!(lines[0].contains("Dec"));
        assert!(lines[1].starts_with("Sun"));
        assert!(lines[7].starts_with("Sat"));
    }

    #[test]
    fn test_render_marks_bucketed_days() {
        let dates = grid_2024();
        let labels = month_labels(&dates);
        let bucket = DayBucket {
            date: "2024-03-05".into(),
            music_sessions: 2,
            drawing_sessions: 0,
            status: practicegrid_core::DayStatus::Music,
        };
        let output = render_year(&dates, &[bucket], &labels);
        // Music cells use the green palette entry
        assert!(output.contains("38;5;42"));
    }

    #[test]
    fn test_format_bucket() {
        let bucket = DayBucket::empty("2024-03-05");
        assert_eq!(
            format_bucket(&bucket),
            "2024-03-05  music: 0  drawing: 0  status: none"
        );
    }
}
