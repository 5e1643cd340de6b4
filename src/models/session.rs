//! Session (interval) model.
//!
//! A session is one scheduled block: a course taught in a room on a
//! given weekday between two times. The solver emits [`ScheduledSession`]
//! values in minutes from midnight; the layout stages work on [`Session`],
//! the same block normalised to fractional hours.
//!
//! # Time Model
//! Hours are `f64` relative to local midnight (9.5 = 09:30).
//! Days are indexed from Monday: 0 = Monday … 6 = Sunday. Only
//! days `0..LAID_OUT_DAYS` appear in the weekly grid.

use serde::{Deserialize, Serialize};

/// Number of weekdays laid out in the grid (Monday–Friday).
pub const LAID_OUT_DAYS: u8 = 5;

/// Raw session as produced by the schedule solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSession {
    /// Course being taught.
    pub course_id: String,
    /// Room the course is taught in.
    pub room_id: String,
    /// Weekday (0 = Monday, 6 = Sunday).
    pub day: u8,
    /// Start time (minutes from midnight).
    pub start_time: i32,
    /// End time (minutes from midnight).
    pub end_time: i32,
}

/// A session normalised to a half-open interval `[start_hour, end_hour)`.
///
/// The `id` is the node key used by the overlap resolver. Uniqueness is
/// assumed but not enforced; duplicates are still laid out independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier (stable across re-renders).
    pub id: String,
    /// Weekday (0 = Monday).
    pub day: u8,
    /// Start hour (inclusive).
    pub start_hour: f64,
    /// End hour (exclusive).
    pub end_hour: f64,
}

impl ScheduledSession {
    /// Creates a raw session.
    pub fn new(
        course_id: impl Into<String>,
        room_id: impl Into<String>,
        day: u8,
        start_time: i32,
        end_time: i32,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            room_id: room_id.into(),
            day,
            start_time,
            end_time,
        }
    }

    /// Duration in minutes (may be zero or negative for malformed input).
    #[inline]
    pub fn duration_minutes(&self) -> i32 {
        self.end_time - self.start_time
    }

    /// Converts to an hour-based [`Session`].
    ///
    /// `index` is the position in the solver output; it is folded into the
    /// id so identical course/room/day triples stay distinct.
    pub fn to_session(&self, index: usize) -> Session {
        Session::from_minutes(
            format!("{}-{}-{}-{}", self.course_id, self.room_id, self.day, index),
            self.day,
            self.start_time,
            self.end_time,
        )
    }
}

/// Converts a solver output list into hour-based sessions, preserving order.
pub fn sessions_from_schedule(raw: &[ScheduledSession]) -> Vec<Session> {
    raw.iter()
        .enumerate()
        .map(|(index, s)| s.to_session(index))
        .collect()
}

impl Session {
    /// Creates a session from fractional hours.
    pub fn new(id: impl Into<String>, day: u8, start_hour: f64, end_hour: f64) -> Self {
        Self {
            id: id.into(),
            day,
            start_hour,
            end_hour,
        }
    }

    /// Creates a session from minutes since midnight.
    pub fn from_minutes(id: impl Into<String>, day: u8, start_min: i32, end_min: i32) -> Self {
        Self::new(id, day, start_min as f64 / 60.0, end_min as f64 / 60.0)
    }

    /// Duration in hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }

    /// Whether both endpoints are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.start_hour.is_finite() && self.end_hour.is_finite()
    }

    /// Whether this session falls on a day shown in the weekly grid.
    #[inline]
    pub fn is_laid_out(&self) -> bool {
        self.day < LAID_OUT_DAYS
    }

    /// Half-open overlap test. Touching endpoints do not overlap.
    ///
    /// Day is not compared; callers group by day first.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_hour < other.end_hour && other.start_hour < self.end_hour
    }

    /// Whether `hour` falls within `[start_hour, end_hour)`.
    #[inline]
    pub fn contains_hour(&self, hour: f64) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }

    /// Position of the session start on a Monday-based week axis (hours).
    #[inline]
    pub fn week_offset_hours(&self) -> f64 {
        self.day as f64 * 24.0 + self.start_hour
    }
}
