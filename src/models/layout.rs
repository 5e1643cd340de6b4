//! Layout output models.
//!
//! Everything here is derived per render pass from the session list and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Column lane assigned to a session within its day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    /// Session this assignment belongs to.
    pub session_id: String,
    /// Zero-based column index.
    pub column: usize,
    /// Number of distinct columns among the session and its direct overlaps (≥ 1).
    pub total_columns: usize,
}

/// Render geometry for one visible session.
///
/// Horizontal placement is a percentage of the day column plus a pixel
/// inset: `left = left_percent% + left_inset_px`,
/// `width = width_percent% - width_inset_px`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryRecord {
    /// Session this geometry belongs to.
    pub session_id: String,
    /// Offset from the top of the grid (px).
    pub top_px: f64,
    /// Block height (px), never below the configured minimum.
    pub height_px: f64,
    /// Left edge as a percentage of the day column.
    pub left_percent: f64,
    /// Pixels added to the left edge.
    pub left_inset_px: f64,
    /// Width as a percentage of the day column.
    pub width_percent: f64,
    /// Pixels removed from the width.
    pub width_inset_px: f64,
    /// Whether the session extends beyond the visible hour range.
    pub clipped: bool,
}

/// One render-ready block in the weekly grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRecord {
    /// Session identifier.
    pub session_id: String,
    /// Weekday (0 = Monday).
    pub day: u8,
    /// Column lane within the day.
    pub column: usize,
    /// Column count of the local overlap neighbourhood.
    pub total_columns: usize,
    /// Offset from the top of the grid (px).
    pub top_px: f64,
    /// Block height (px).
    pub height_px: f64,
    /// Left edge (% of day column).
    pub left_percent: f64,
    /// Left edge pixel inset.
    pub left_inset_px: f64,
    /// Width (% of day column).
    pub width_percent: f64,
    /// Width pixel inset.
    pub width_inset_px: f64,
    /// Whether the session is truncated by the grid bounds.
    pub clipped: bool,
    /// Whether the session is running at the current time.
    pub is_now: bool,
}

impl LayoutRecord {
    /// Joins a column assignment with its geometry.
    pub fn new(day: u8, assignment: &ColumnAssignment, geometry: GeometryRecord, is_now: bool) -> Self {
        Self {
            session_id: geometry.session_id,
            day,
            column: assignment.column,
            total_columns: assignment.total_columns,
            top_px: geometry.top_px,
            height_px: geometry.height_px,
            left_percent: geometry.left_percent,
            left_inset_px: geometry.left_inset_px,
            width_percent: geometry.width_percent,
            width_inset_px: geometry.width_inset_px,
            clipped: geometry.clipped,
            is_now,
        }
    }

    /// Bottom edge of the block (px).
    #[inline]
    pub fn bottom_px(&self) -> f64 {
        self.top_px + self.height_px
    }
}
