// crates/core/src/timezone.rs
//! UTC-offset → IANA zone resolution and calendar-date formatting.
//!
//! The client stores the user's timezone as a plain UTC offset in the range
//! [-12, 12]; every offset maps to one representative city zone so that
//! calendar-day bucketing follows real local time (DST included). Offsets
//! outside the table degrade silently to [`DEFAULT_ZONE`] — that fallback is
//! documented behavior, not an error path.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Zone used when the stored offset falls outside [-12, 12].
pub const DEFAULT_ZONE: Tz = chrono_tz::America::New_York;

/// Resolve a signed UTC offset to its canonical IANA zone.
pub fn resolve_timezone(offset: i32) -> Tz {
    match offset {
        -12 => chrono_tz::Etc::GMTPlus12,
        -11 => chrono_tz::Pacific::Pago_Pago,
        -10 => chrono_tz::Pacific::Honolulu,
        -9 => chrono_tz::America::Anchorage,
        -8 => chrono_tz::America::Los_Angeles,
        -7 => chrono_tz::America::Denver,
        -6 => chrono_tz::America::Chicago,
        -5 => chrono_tz::America::New_York,
        -4 => chrono_tz::America::Halifax,
        -3 => chrono_tz::America::Sao_Paulo,
        -2 => chrono_tz::Atlantic::South_Georgia,
        -1 => chrono_tz::Atlantic::Azores,
        0 => chrono_tz::Etc::UTC,
        1 => chrono_tz::Europe::Paris,
        2 => chrono_tz::Europe::Athens,
        3 => chrono_tz::Europe::Moscow,
        4 => chrono_tz::Asia::Dubai,
        5 => chrono_tz::Asia::Karachi,
        6 => chrono_tz::Asia::Dhaka,
        7 => chrono_tz::Asia::Bangkok,
        8 => chrono_tz::Asia::Shanghai,
        9 => chrono_tz::Asia::Tokyo,
        10 => chrono_tz::Australia::Sydney,
        11 => chrono_tz::Pacific::Guadalcanal,
        12 => chrono_tz::Pacific::Auckland,
        _ => DEFAULT_ZONE,
    }
}

/// Format an instant as a `YYYY-MM-DD` calendar date in the given zone.
pub fn format_date(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%Y-%m-%d").to_string()
}

/// Today's `YYYY-MM-DD` calendar date in the given zone.
pub fn today(tz: Tz) -> String {
    format_date(Utc::now(), tz)
}

// ============================================================================
// Tests
// ============================================================================
