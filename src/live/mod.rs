//! Live-time tracking: "now" highlighting and the current/next session.
//!
//! The tracker owns the only asynchronous piece of the crate: a cancellable
//! tokio task that republishes the wall-clock reading on a fixed period.
//! Everything else here is a pure function of a [`CurrentTime`] value that
//! callers thread through explicitly.

mod clock;
mod tracker;

pub use clock::{Clock, CurrentTime, FixedClock, SystemClock};
pub use tracker::{LiveTimeTracker, TrackerError, DEFAULT_TICK_INTERVAL};

use crate::models::Session;

/// Whether `session` is running at `now`.
///
/// True iff the days match and `now.hour ∈ [start_hour, end_hour)`.
pub fn is_now(session: &Session, now: CurrentTime) -> bool {
    session.day == now.day_index && session.contains_hour(now.hour)
}

/// The session running now, else the nearest one starting later this week.
///
/// Distance is measured on the Monday-based week axis (`day * 24 + hour`).
/// Only sessions starting strictly after `now` count as upcoming. When
/// several sessions are equally near (or several are running), the first
/// in input order wins.
///
/// # Example
/// ```
/// use u_timetable::live::{current_or_next_session, CurrentTime};
/// use u_timetable::models::Session;
///
/// let sessions = vec![
///     Session::new("mon", 0, 9.0, 10.0),
///     Session::new("tue", 1, 8.0, 9.0),
/// ];
/// let now = CurrentTime::new(0, 11.0);
/// assert_eq!(current_or_next_session(&sessions, now).unwrap().id, "tue");
/// ```
pub fn current_or_next_session(sessions: &[Session], now: CurrentTime) -> Option<&Session> {
    if let Some(current) = sessions.iter().find(|s| is_now(s, now)) {
        return Some(current);
    }

    let origin = now.week_offset_hours();
    let mut best: Option<(&Session, f64)> = None;
    for session in sessions {
        let distance = session.week_offset_hours() - origin;
        // NaN fails both comparisons and is skipped.
        if distance > 0.0 && best.map_or(true, |(_, d)| distance < d) {
            best = Some((session, distance));
        }
    }
    best.map(|(session, _)| session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> Vec<Session> {
        vec![
            Session::new("mon-9", 0, 9.0, 10.0),
            Session::new("mon-10", 0, 10.0, 11.5),
            Session::new("wed-14", 2, 14.0, 15.0),
        ]
    }

    #[test]
    fn test_is_now_matches_only_running_session() {
        let sessions = week();
        let now = CurrentTime::new(0, 9.5);
        let running: Vec<&str> = sessions
            .iter()
            .filter(|s| is_now(s, now))
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(running, vec!["mon-9"]);
    }

    #[test]
    fn test_is_now_boundaries() {
        let s = Session::new("S", 0, 9.0, 10.0);
        assert!(is_now(&s, CurrentTime::new(0, 9.0)));
        assert!(!is_now(&s, CurrentTime::new(0, 10.0))); // exclusive end
        assert!(!is_now(&s, CurrentTime::new(1, 9.5))); // other day
    }

    #[test]
    fn test_current_preferred() {
        let sessions = week();
        let found = current_or_next_session(&sessions, CurrentTime::new(0, 10.25)).unwrap();
        assert_eq!(found.id, "mon-10");
    }

    #[test]
    fn test_next_later_in_week() {
        let sessions = week();
        let found = current_or_next_session(&sessions, CurrentTime::new(1, 8.0)).unwrap();
        assert_eq!(found.id, "wed-14");
    }

    #[test]
    fn test_none_after_last_session() {
        let sessions = week();
        assert!(current_or_next_session(&sessions, CurrentTime::new(4, 12.0)).is_none());
        assert!(current_or_next_session(&[], CurrentTime::new(0, 9.0)).is_none());
    }

    #[test]
    fn test_equal_distance_first_in_input_order() {
        let sessions = vec![
            Session::new("first", 3, 9.0, 10.0),
            Session::new("second", 3, 9.0, 11.0),
        ];
        let found = current_or_next_session(&sessions, CurrentTime::new(3, 8.0)).unwrap();
        assert_eq!(found.id, "first");

        let reversed: Vec<Session> = sessions.into_iter().rev().collect();
        let found = current_or_next_session(&reversed, CurrentTime::new(3, 8.0)).unwrap();
        assert_eq!(found.id, "second");
    }

    #[test]
    fn test_started_session_is_not_upcoming() {
        // Ended earlier today; the only other session is tomorrow.
        let sessions = vec![
            Session::new("done", 0, 8.0, 9.0),
            Session::new("tomorrow", 1, 8.0, 9.0),
        ];
        let found = current_or_next_session(&sessions, CurrentTime::new(0, 9.0)).unwrap();
        assert_eq!(found.id, "tomorrow");
    }

    #[test]
    fn test_weekend_now_finds_nothing_ahead() {
        let sessions = week();
        assert!(current_or_next_session(&sessions, CurrentTime::new(5, 10.0)).is_none());
    }
}
