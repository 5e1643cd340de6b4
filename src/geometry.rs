//! Geometry projection: column assignments and grid bounds to render boxes.
//!
//! # Horizontal
//! `width_percent = 100 / total_columns`, `left_percent = column * width_percent`.
//! Pixel insets keep blocks off the container edges (`container_padding_px`)
//! and apart from each other (half of `column_gap_px` on each shared edge).
//!
//! # Vertical
//! The session interval is intersected with the grid bounds. Sessions with
//! no visible part are excluded. The visible part is placed at
//! `(visible_start - bounds.start) * row_height` with a minimum height floor,
//! and `clipped` reports whether anything was cut away.

use log::debug;

use crate::bounds::GridBounds;
use crate::config::LayoutConfig;
use crate::models::{ColumnAssignment, GeometryRecord, Session};

/// Projects one session into render geometry.
///
/// Returns `None` when the session is entirely outside `bounds` or has
/// non-finite hours. A zero/negative-duration session is drawn as a
/// minimum-height block at its start hour if that hour is visible.
///
/// # Example
/// ```
/// use u_timetable::bounds::GridBounds;
/// use u_timetable::config::LayoutConfig;
/// use u_timetable::geometry::project;
/// use u_timetable::models::{ColumnAssignment, Session};
///
/// let session = Session::new("S1", 0, 9.0, 10.5);
/// let column = ColumnAssignment { session_id: "S1".into(), column: 1, total_columns: 2 };
/// let geom = project(&session, &column, GridBounds::new(8, 20), &LayoutConfig::default()).unwrap();
/// assert_eq!(geom.top_px, 60.0);
/// assert_eq!(geom.height_px, 90.0);
/// assert_eq!(geom.left_percent, 50.0);
/// assert!(!geom.clipped);
/// ```
pub fn project(
    session: &Session,
    assignment: &ColumnAssignment,
    bounds: GridBounds,
    config: &LayoutConfig,
) -> Option<GeometryRecord> {
    let (visible_start, visible_end) = visible_span(session, bounds)?;

    let top_px = (visible_start - bounds.start_hour as f64) * config.hour_row_height_px;
    let height_px = ((visible_end - visible_start) * config.hour_row_height_px)
        .max(config.minimum_block_height_px);
    let clipped = visible_start > session.start_hour || visible_end < session.end_hour;

    let (left_percent, width_percent) = horizontal_percent(assignment);
    let (left_inset_px, width_inset_px) = horizontal_insets(assignment, config);

    Some(GeometryRecord {
        session_id: session.id.clone(),
        top_px,
        height_px,
        left_percent,
        left_inset_px,
        width_percent,
        width_inset_px,
        clipped,
    })
}

/// Portion of the session inside the grid, or `None` if nothing is visible.
fn visible_span(session: &Session, bounds: GridBounds) -> Option<(f64, f64)> {
    if !session.is_finite() {
        debug!("session {} has non-finite hours, skipped", session.id);
        return None;
    }

    let grid_start = bounds.start_hour as f64;
    let grid_end = bounds.end_hour as f64;

    if session.end_hour <= session.start_hour {
        let at = session.start_hour;
        return (at >= grid_start && at < grid_end).then_some((at, at));
    }

    let visible_start = session.start_hour.max(grid_start);
    let visible_end = session.end_hour.min(grid_end);
    if visible_end <= visible_start {
        debug!(
            "session {} [{}, {}) outside grid [{}, {})",
            session.id, session.start_hour, session.end_hour, bounds.start_hour, bounds.end_hour
        );
        return None;
    }
    Some((visible_start, visible_end))
}

fn horizontal_percent(assignment: &ColumnAssignment) -> (f64, f64) {
    let total = assignment.total_columns.max(1);
    let column = assignment.column.min(total - 1);
    let width = 100.0 / total as f64;
    (column as f64 * width, width)
}

/// Left inset and total width inset (px) for a column.
fn horizontal_insets(assignment: &ColumnAssignment, config: &LayoutConfig) -> (f64, f64) {
    let total = assignment.total_columns.max(1);
    let column = assignment.column.min(total - 1);
    let half_gap = config.column_gap_px / 2.0;

    let left = if column == 0 {
        config.container_padding_px
    } else {
        half_gap
    };
    let right = if column + 1 == total {
        config.container_padding_px
    } else {
        half_gap
    };
    (left, left + right)
}
