//! Wall-clock readings on the weekly axis.

use std::fmt::Debug;

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// A point in the week: weekday plus fractional hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentTime {
    /// Weekday (0 = Monday, 6 = Sunday).
    pub day_index: u8,
    /// Fractional hour of day (13.5 = 13:30).
    pub hour: f64,
}

impl CurrentTime {
    /// Creates a reading from explicit values.
    pub fn new(day_index: u8, hour: f64) -> Self {
        Self { day_index, hour }
    }

    /// Converts a naive local timestamp.
    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        let hour =
            dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
        Self::new(dt.weekday().num_days_from_monday() as u8, hour)
    }

    /// Converts a zoned timestamp using its own local wall time.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self::from_naive(&dt.naive_local())
    }

    /// Position on a Monday-based week axis (hours).
    #[inline]
    pub fn week_offset_hours(&self) -> f64 {
        self.day_index as f64 * 24.0 + self.hour
    }
}

/// Source of "now" readings.
///
/// The tracker reads through this seam so tests and server-side renderers
/// can pin the time.
pub trait Clock: Send + Sync + Debug {
    /// Current reading.
    fn now(&self) -> CurrentTime;
}

/// System local time via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> CurrentTime {
        CurrentTime::from_datetime(&Local::now())
    }
}

/// A clock frozen at one reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CurrentTime);

impl Clock for FixedClock {
    fn now(&self) -> CurrentTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_from_naive() {
        // 2024-12-25 is a Wednesday.
        let dt = NaiveDate::from_ymd_opt(2024, 12, 25)
            .unwrap()
            .and_hms_opt(14, 45, 0)
            .unwrap();
        let now = CurrentTime::from_naive(&dt);
        assert_eq!(now.day_index, 2);
        assert!((now.hour - 14.75).abs() < 1e-10);
        assert!((now.week_offset_hours() - 62.75).abs() < 1e-10);
    }

    #[test]
    fn test_sunday_is_six() {
        let dt = NaiveDate::from_ymd_opt(2024, 12, 29)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CurrentTime::from_naive(&dt).day_index, 6);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(CurrentTime::new(1, 9.5));
        assert_eq!(clock.now(), CurrentTime::new(1, 9.5));
    }

    #[test]
    fn test_system_clock_in_range() {
        let now = SystemClock.now();
        assert!(now.day_index < 7);
        assert!((0.0..24.0).contains(&now.hour));
    }
}
