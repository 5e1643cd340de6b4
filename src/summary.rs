//! Week summary statistics and groupings.
//!
//! Computes the headline numbers shown above a timetable and the
//! by-room / by-course listings, straight from solver output.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Sessions | Number of scheduled sessions |
//! | Courses | Distinct course IDs |
//! | Rooms | Distinct room IDs |
//! | Teaching hours | Sum of session durations (hours) |
//! | Per-day load | Sessions on each of Monday–Friday |
//! | Busiest day | Day with the most sessions (earliest on ties) |

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{ScheduledSession, LAID_OUT_DAYS};

/// Week-level indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Number of sessions.
    pub session_count: usize,
    /// Distinct courses.
    pub course_count: usize,
    /// Distinct rooms.
    pub room_count: usize,
    /// Total teaching time (hours).
    pub total_teaching_hours: f64,
    /// Session count per laid-out day (index 0 = Monday).
    pub sessions_per_day: Vec<usize>,
    /// Day with the most sessions, if any session falls on a laid-out day.
    pub busiest_day: Option<u8>,
}

impl WeekSummary {
    /// Computes the summary from solver output.
    pub fn calculate(sessions: &[ScheduledSession]) -> Self {
        let courses: HashSet<&str> = sessions.iter().map(|s| s.course_id.as_str()).collect();
        let rooms: HashSet<&str> = sessions.iter().map(|s| s.room_id.as_str()).collect();

        let total_teaching_hours: f64 = sessions
            .iter()
            .map(|s| s.duration_minutes() as f64 / 60.0)
            .sum();

        let mut sessions_per_day = vec![0usize; LAID_OUT_DAYS as usize];
        for s in sessions {
            if let Some(count) = sessions_per_day.get_mut(s.day as usize) {
                *count += 1;
            }
        }

        let mut busiest_day = None;
        let mut busiest = 0;
        for (day, &count) in sessions_per_day.iter().enumerate() {
            if count > busiest {
                busiest = count;
                busiest_day = Some(day as u8);
            }
        }

        Self {
            session_count: sessions.len(),
            course_count: courses.len(),
            room_count: rooms.len(),
            total_teaching_hours,
            sessions_per_day,
            busiest_day,
        }
    }

    /// Teaching hours rounded to the nearest whole hour.
    pub fn rounded_teaching_hours(&self) -> i64 {
        self.total_teaching_hours.round() as i64
    }
}

/// Sessions grouped under one key, in first-appearance order.
pub type SessionGroups<'a> = Vec<(&'a str, Vec<&'a ScheduledSession>)>;

/// Groups sessions by room, rooms ordered by first appearance.
pub fn group_by_room(sessions: &[ScheduledSession]) -> SessionGroups<'_> {
    group_by(sessions, |s| s.room_id.as_str())
}

/// Groups sessions by course, courses ordered by first appearance.
pub fn group_by_course(sessions: &[ScheduledSession]) -> SessionGroups<'_> {
    group_by(sessions, |s| s.course_id.as_str())
}

fn group_by<'a>(
    sessions: &'a [ScheduledSession],
    key: impl Fn(&'a ScheduledSession) -> &'a str,
) -> SessionGroups<'a> {
    let mut groups: SessionGroups<'a> = Vec::new();
    for s in sessions {
        let k = key(s);
        match groups.iter_mut().find(|(g, _)| *g == k) {
            Some((_, members)) => members.push(s),
            None => groups.push((k, vec![s])),
        }
    }
    groups
}
