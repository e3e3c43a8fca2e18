// crates/core/src/service.rs
//! Heatmap service: the facade the rendering layer talks to.
//!
//! Wires a [`SessionStore`] and a [`SettingsProvider`] into the pure
//! aggregation core. Thresholds and the timezone offset are fetched from the
//! provider on every call — never cached — so the heatmap can never drift
//! from the source-of-truth data after a settings change.

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::grid;
use crate::heatmap;
use crate::settings::SettingsProvider;
use crate::store::SessionStore;
use crate::timezone::{self, resolve_timezone};
use crate::types::{DayBucket, HeatmapTargets, MonthLabel};

pub struct HeatmapService<S, P> {
    store: S,
    settings: P,
}

impl<S: SessionStore, P: SettingsProvider> HeatmapService<S, P> {
    pub fn new(store: S, settings: P) -> Self {
        Self { store, settings }
    }

    /// One bucket per date with at least one qualifying session, sorted
    /// ascending by date. Omitted targets default to 2/2.
    pub fn calculate_heatmap(
        &self,
        targets: Option<HeatmapTargets>,
    ) -> Result<Vec<DayBucket>, StoreError> {
        let thresholds = self.settings.validation_thresholds();
        let tz = resolve_timezone(self.settings.timezone_offset());
        let music = self.store.music_sessions()?;
        let drawing = self.store.drawing_sessions()?;
        Ok(heatmap::aggregate(
            &music,
            &drawing,
            &thresholds,
            &targets.unwrap_or_default(),
            tz,
        ))
    }

    /// The bucket for one `YYYY-MM-DD` date. A date with no qualifying
    /// sessions — including a string that is not a date at all — yields the
    /// synthesized all-zero `none` bucket rather than an error.
    pub fn heatmap_for_date(
        &self,
        date: &str,
        targets: Option<HeatmapTargets>,
    ) -> Result<DayBucket, StoreError> {
        let buckets = self.calculate_heatmap(targets)?;
        Ok(buckets
            .into_iter()
            .find(|bucket| bucket.date == date)
            .unwrap_or_else(|| DayBucket::empty(date)))
    }

    /// The bucket for today in the user's zone.
    pub fn today_heatmap(
        &self,
        targets: Option<HeatmapTargets>,
    ) -> Result<DayBucket, StoreError> {
        let tz = resolve_timezone(self.settings.timezone_offset());
        self.heatmap_for_date(&timezone::today(tz), targets)
    }

    /// The 371-date display grid for the current year in the user's zone.
    pub fn generate_heatmap_dates(&self) -> Vec<String> {
        self.heatmap_dates_at(Utc::now())
    }

    /// Grid anchored at an explicit reference instant.
    pub fn heatmap_dates_at(&self, reference: DateTime<Utc>) -> Vec<String> {
        let tz = resolve_timezone(self.settings.timezone_offset());
        grid::build_year_grid(tz, reference)
    }

    /// Month labels for the current year's grid.
    pub fn month_labels(&self) -> Vec<MonthLabel> {
        grid::month_labels(&self.generate_heatmap_dates())
    }
}

// ============================================================================
// Tests
// ============================================================================
