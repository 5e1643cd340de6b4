//! Weekly timetable layout for the U-Engine ecosystem.
//!
//! Turns a flat list of scheduled sessions (course, room, weekday, start,
//! end) into a non-overlapping visual grid: column lanes for overlapping
//! sessions, a dynamic visible hour range, pixel geometry, and "now"
//! highlighting. Which session goes where is decided upstream by a solver
//! (e.g. `u-schedule`); this crate only lays the result out.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ScheduledSession`, `Session`,
//!   `ColumnAssignment`, `GeometryRecord`, `LayoutRecord`
//! - **`bounds`**: Visible hour range (`GridBounds`)
//! - **`overlap`**: Column assignment for same-day overlaps
//! - **`geometry`**: Percent/pixel projection with clipping
//! - **`engine`**: The full pipeline (`LayoutEngine`, `WeekLayout`)
//! - **`live`**: Current-time readings, `is_now`, next session, `LiveTimeTracker`
//! - **`config`**: `LayoutConfig` constants and validation
//! - **`validation`**: Optional input integrity checks
//! - **`summary`**: Week statistics and by-room / by-course groupings
//! - **`format`**: Hour and weekday labels
//!
//! # Architecture
//!
//! Everything except the tracker is a pure function of its arguments:
//! sessions and the current time go in, plain serde data comes out. No
//! state survives a layout pass and no rendering framework types appear
//! in the API.
//!
//! # References
//!
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8 (interval graphs)

pub mod bounds;
pub mod config;
pub mod engine;
pub mod format;
pub mod geometry;
pub mod live;
pub mod models;
pub mod overlap;
pub mod summary;
pub mod validation;
