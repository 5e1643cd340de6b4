//! Visible hour range of the weekly grid.
//!
//! # Algorithm
//!
//! 1. No sessions → the fallback window (default `[8, 20)`).
//! 2. Otherwise `start = min(fallback_start, floor(min start_hour))` and
//!    `end = max(fallback_end, ceil(max end_hour))`: the fallback window is
//!    always included and grows to cover every session.
//! 3. Clamp to `[clamp_start, clamp_end]` (default `[5, 23]`).
//! 4. Guarantee at least one row.

use serde::{Deserialize, Serialize};

use crate::config::BoundsConfig;
use crate::format::format_hour;
use crate::models::Session;

/// Integer hour range `[start_hour, end_hour)` shown by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    /// First visible hour (inclusive).
    pub start_hour: i32,
    /// Last visible hour (exclusive).
    pub end_hour: i32,
}

impl GridBounds {
    /// Creates bounds from explicit hours.
    pub fn new(start_hour: i32, end_hour: i32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Computes the bounds covering every session (all days combined).
    ///
    /// Sessions with non-finite hours are ignored.
    ///
    /// # Example
    /// ```
    /// use u_timetable::bounds::GridBounds;
    /// use u_timetable::config::BoundsConfig;
    /// use u_timetable::models::Session;
    ///
    /// let sessions = vec![Session::new("S1", 0, 7.5, 9.0)];
    /// let bounds = GridBounds::compute(&sessions, &BoundsConfig::default());
    /// assert_eq!(bounds, GridBounds::new(7, 20));
    /// ```
    pub fn compute(sessions: &[Session], config: &BoundsConfig) -> Self {
        let mut earliest: Option<f64> = None;
        let mut latest: Option<f64> = None;
        for s in sessions.iter().filter(|s| s.is_finite()) {
            let start = s.start_hour.floor();
            let end = s.end_hour.ceil();
            earliest = Some(earliest.map_or(start, |e| e.min(start)));
            latest = Some(latest.map_or(end, |l| l.max(end)));
        }

        let (Some(earliest), Some(latest)) = (earliest, latest) else {
            return Self::new(config.fallback_start_hour, config.fallback_end_hour);
        };

        let start = (earliest.min(config.fallback_start_hour as f64) as i32)
            .max(config.clamp_start_hour);
        let mut end =
            (latest.max(config.fallback_end_hour as f64) as i32).min(config.clamp_end_hour);
        if end <= start {
            end = start + 1;
        }

        Self::new(start, end)
    }

    /// Number of hour rows (≥ 1).
    #[inline]
    pub fn row_count(&self) -> i32 {
        (self.end_hour - self.start_hour).max(1)
    }

    /// Row hours `[start, start + 1, …, end - 1]`; never empty.
    pub fn hours(&self) -> Vec<i32> {
        (self.start_hour..self.start_hour + self.row_count()).collect()
    }

    /// Formatted label for each row.
    pub fn row_labels(&self) -> Vec<String> {
        self.hours()
            .into_iter()
            .map(|h| format_hour(h as f64))
            .collect()
    }

    /// Total grid height for a given row height (px).
    #[inline]
    pub fn height_px(&self, hour_row_height_px: f64) -> f64 {
        self.row_count() as f64 * hour_row_height_px
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        let config = BoundsConfig::default();
        Self::new(config.fallback_start_hour, config.fallback_end_hour)
    }
}
