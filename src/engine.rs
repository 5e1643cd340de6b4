//! Week layout pipeline.
//!
//! # Algorithm
//!
//! 1. Keep sessions on laid-out days (Monday–Friday).
//! 2. Compute [`GridBounds`] over all of them.
//! 3. Group by day (input order preserved) and run the overlap resolver.
//! 4. Project each session; drop those with no visible part.
//! 5. Join with the optional current time for `is_now`.
//!
//! Every call recomputes from scratch; nothing is cached between passes.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::bounds::GridBounds;
use crate::config::LayoutConfig;
use crate::geometry::project;
use crate::live::{is_now, Clock, CurrentTime, LiveTimeTracker};
use crate::models::{sessions_from_schedule, LayoutRecord, ScheduledSession, Session, LAID_OUT_DAYS};
use crate::overlap::resolve_day;

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekLayout {
    /// Visible hour range.
    pub bounds: GridBounds,
    /// Visible sessions, ordered by day then input order.
    pub records: Vec<LayoutRecord>,
}

impl WeekLayout {
    /// Records for one weekday.
    pub fn records_for_day(&self, day: u8) -> Vec<&LayoutRecord> {
        self.records.iter().filter(|r| r.day == day).collect()
    }

    /// Finds the record for a session id (first match).
    pub fn record(&self, session_id: &str) -> Option<&LayoutRecord> {
        self.records.iter().find(|r| r.session_id == session_id)
    }

    /// Records currently running.
    pub fn now_records(&self) -> Vec<&LayoutRecord> {
        self.records.iter().filter(|r| r.is_now).collect()
    }

    /// Number of visible records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Turns session lists into render-ready weekly layouts.
///
/// # Example
/// ```
/// use u_timetable::engine::LayoutEngine;
/// use u_timetable::live::CurrentTime;
/// use u_timetable::models::Session;
///
/// let sessions = vec![
///     Session::new("A", 0, 9.0, 10.0),
///     Session::new("B", 0, 9.5, 10.5),
/// ];
/// let layout = LayoutEngine::new().layout(&sessions, Some(CurrentTime::new(0, 9.25)));
/// assert_eq!(layout.record_count(), 2);
/// assert!(layout.record("A").unwrap().is_now);
/// assert!(!layout.record("B").unwrap().is_now);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Grid bounds for a session list (laid-out days only).
    pub fn bounds(&self, sessions: &[Session]) -> GridBounds {
        let visible: Vec<Session> = sessions.iter().filter(|s| s.is_laid_out()).cloned().collect();
        GridBounds::compute(&visible, &self.config.bounds)
    }

    /// Lays out a week of sessions.
    ///
    /// `now` drives `is_now`; pass `None` to skip highlighting.
    pub fn layout(&self, sessions: &[Session], now: Option<CurrentTime>) -> WeekLayout {
        let laid_out: Vec<Session> = sessions.iter().filter(|s| s.is_laid_out()).cloned().collect();
        let skipped = sessions.len() - laid_out.len();
        if skipped > 0 {
            debug!("{skipped} session(s) outside Monday-Friday not laid out");
        }

        let bounds = GridBounds::compute(&laid_out, &self.config.bounds);

        let mut records = Vec::with_capacity(laid_out.len());
        for day in 0..LAID_OUT_DAYS {
            let day_sessions: Vec<Session> =
                laid_out.iter().filter(|s| s.day == day).cloned().collect();
            if day_sessions.is_empty() {
                continue;
            }

            let assignments = resolve_day(&day_sessions);
            for (session, assignment) in day_sessions.iter().zip(&assignments) {
                let Some(geometry) = project(session, assignment, bounds, &self.config) else {
                    continue;
                };
                let running = now.is_some_and(|t| is_now(session, t));
                records.push(LayoutRecord::new(day, assignment, geometry, running));
            }
        }

        debug!(
            "laid out {} of {} session(s) in grid [{}, {})",
            records.len(),
            sessions.len(),
            bounds.start_hour,
            bounds.end_hour
        );
        WeekLayout { bounds, records }
    }

    /// Lays out raw solver output (minutes from midnight).
    pub fn layout_schedule(
        &self,
        raw: &[ScheduledSession],
        now: Option<CurrentTime>,
    ) -> WeekLayout {
        self.layout(&sessions_from_schedule(raw), now)
    }

    /// Creates an idle tracker ticking at the configured interval.
    pub fn tracker(&self, clock: Arc<dyn Clock>) -> LiveTimeTracker {
        LiveTimeTracker::new(clock).with_interval(self.config.tick_interval())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live::FixedClock;

    fn engine() -> LayoutEngine {
        LayoutEngine::new()
    }

    #[test]
    fn test_empty_week() {
        let layout = engine().layout(&[], Some(CurrentTime::new(0, 9.0)));
        assert_eq!(layout.bounds, GridBounds::new(8, 20));
        assert_eq!(layout.record_count(), 0);
        assert!(layout.now_records().is_empty());
    }

    #[test]
    fn test_overlap_pair_on_monday() {
        let sessions = vec![
            Session::new("A", 0, 9.0, 10.0),
            Session::new("B", 0, 9.5, 10.5),
        ];
        let layout = engine().layout(&sessions, None);
        let a = layout.record("A").unwrap();
        let b = layout.record("B").unwrap();
        assert_ne!(a.column, b.column);
        assert_eq!(a.total_columns, 2);
        assert_eq!(b.total_columns, 2);
        assert!((a.width_percent - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_days_resolved_independently() {
        let sessions = vec![
            Session::new("mon", 0, 9.0, 10.0),
            Session::new("tue", 1, 9.0, 10.0),
        ];
        let layout = engine().layout(&sessions, None);
        assert!(layout.records.iter().all(|r| r.column == 0 && r.total_columns == 1));
        assert_eq!(layout.records_for_day(0).len(), 1);
        assert_eq!(layout.records_for_day(1).len(), 1);
    }

    #[test]
    fn test_records_ordered_by_day_then_input() {
        let sessions = vec![
            Session::new("wed", 2, 9.0, 10.0),
            Session::new("mon-late", 0, 14.0, 15.0),
            Session::new("mon-early", 0, 8.0, 9.0),
        ];
        let layout = engine().layout(&sessions, None);
        let ids: Vec<&str> = layout.records.iter().map(|r| r.session_id.as_str()).collect();
        assert_eq!(ids, vec!["mon-late", "mon-early", "wed"]);
    }

    #[test]
    fn test_early_session_clamped_and_clipped() {
        let sessions = vec![
            Session::new("early", 0, 4.0, 6.0),
            Session::new("normal", 1, 9.0, 12.0),
            Session::new("late", 2, 16.0, 19.0),
        ];
        let layout = engine().layout(&sessions, None);
        assert_eq!(layout.bounds.start_hour, 5);
        let early = layout.record("early").unwrap();
        assert!(early.clipped);
        assert!((early.top_px - 0.0).abs() < 1e-10);
        assert!((early.height_px - 60.0).abs() < 1e-10);
        assert!(!layout.record("normal").unwrap().clipped);
    }

    #[test]
    fn test_weekend_sessions_ignored() {
        let sessions = vec![
            Session::new("sat", 5, 4.0, 23.0),
            Session::new("mon", 0, 9.0, 10.0),
        ];
        let layout = engine().layout(&sessions, None);
        assert_eq!(layout.bounds, GridBounds::new(8, 20));
        assert_eq!(layout.record_count(), 1);
        assert!(layout.record("sat").is_none());
        assert_eq!(engine().bounds(&sessions), GridBounds::new(8, 20));
    }

    #[test]
    fn test_is_now_highlights_single_session() {
        let sessions = vec![
            Session::new("a", 0, 9.0, 10.0),
            Session::new("b", 0, 10.0, 11.0),
            Session::new("c", 0, 13.0, 14.0),
        ];
        let layout = engine().layout(&sessions, Some(CurrentTime::new(0, 10.5)));
        let now: Vec<&str> = layout
            .now_records()
            .iter()
            .map(|r| r.session_id.as_str())
            .collect();
        assert_eq!(now, vec!["b"]);
    }

    #[test]
    fn test_degenerate_input_does_not_crash() {
        let sessions = vec![
            Session::new("dup", 0, 9.0, 10.0),
            Session::new("dup", 0, 9.0, 10.0),
            Session::new("zero", 0, 11.0, 11.0),
            Session::new("nan", 0, f64::NAN, 12.0),
        ];
        let layout = engine().layout(&sessions, Some(CurrentTime::new(0, 9.0)));
        assert_eq!(layout.record_count(), 3);
        for r in &layout.records {
            assert!(r.top_px.is_finite());
            assert!(r.height_px.is_finite());
            assert!(r.left_percent.is_finite());
        }
        let dups: Vec<usize> = layout
            .records
            .iter()
            .filter(|r| r.session_id == "dup")
            .map(|r| r.column)
            .collect();
        assert_eq!(dups.len(), 2);
        assert_ne!(dups[0], dups[1]);
    }

    #[test]
    fn test_layout_schedule_from_minutes() {
        let raw = vec![
            ScheduledSession::new("CS101", "R1", 0, 540, 630),
            ScheduledSession::new("MA201", "R2", 0, 600, 660),
        ];
        let layout = engine().layout_schedule(&raw, None);
        let first = layout.record("CS101-R1-0-0").unwrap();
        let second = layout.record("MA201-R2-0-1").unwrap();
        assert_eq!(first.total_columns, 2);
        assert_ne!(first.column, second.column);
        assert!((first.top_px - 60.0).abs() < 1e-10);
        assert!((first.height_px - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_custom_row_height() {
        let config = LayoutConfig::new().with_hour_row_height(40.0);
        let layout = LayoutEngine::new()
            .with_config(config)
            .layout(&[Session::new("S", 0, 10.0, 12.0)], None);
        let r = layout.record("S").unwrap();
        assert!((r.top_px - 80.0).abs() < 1e-10);
        assert!((r.height_px - 80.0).abs() < 1e-10);
        assert!((r.bottom_px() - 160.0).abs() < 1e-10);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let sessions = vec![
            Session::new("x", 3, 9.0, 11.0),
            Session::new("y", 3, 9.0, 11.0),
            Session::new("z", 3, 10.0, 12.0),
        ];
        let e = engine();
        assert_eq!(e.layout(&sessions, None), e.layout(&sessions, None));
    }

    #[test]
    fn test_layout_serializes() {
        let layout = engine().layout(&[Session::new("S", 0, 9.0, 10.0)], None);
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["bounds"]["start_hour"], 8);
        assert_eq!(json["records"][0]["session_id"], "S");
        assert_eq!(json["records"][0]["clipped"], false);
    }

    #[test]
    fn test_tracker_uses_config_interval() {
        let engine = LayoutEngine::new().with_config(LayoutConfig::new().with_tick_interval_secs(15));
        let tracker = engine.tracker(Arc::new(FixedClock(CurrentTime::new(0, 9.0))));
        assert_eq!(tracker.interval(), std::time::Duration::from_secs(15));
        assert!(!tracker.is_ticking());
    }
}
