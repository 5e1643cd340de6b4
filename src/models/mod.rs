//! Timetable domain models.
//!
//! Input types describe what the solver scheduled; output types describe
//! where each block is drawn. Both are plain serde-friendly data so any
//! rendering layer (web, TUI, native) can consume them.
//!
//! # Pipeline
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | Interval model | `ScheduledSession` | `Session` |
//! | Overlap resolver | `Session` (one day) | `ColumnAssignment` |
//! | Geometry projector | `Session` + `ColumnAssignment` | `GeometryRecord` |
//! | Engine | all of the above | `LayoutRecord` |

mod layout;
mod session;

pub use layout::{ColumnAssignment, GeometryRecord, LayoutRecord};
pub use session::{sessions_from_schedule, ScheduledSession, Session, LAID_OUT_DAYS};
