//! Overlap resolution: column lanes for sessions sharing a day.
//!
//! # Algorithm
//!
//! 1. Sort by start hour ascending, then duration descending, then input
//!    position (stable), so longer sessions starting together claim low columns.
//! 2. Build the direct-overlap neighbour list of every session (pairwise
//!    half-open test).
//! 3. Greedy colouring in sorted order: each session takes the smallest
//!    column not used by an already-placed neighbour.
//! 4. `total_columns` = distinct columns among the session and its direct
//!    neighbours. This is a local count, not the chromatic number of the
//!    transitively connected cluster, so chained overlaps may report
//!    different widths for sessions in the same cluster.
//!
//! # Complexity
//! O(n²) per day; n is small (sessions in one weekday).
//!
//! # Reference
//! Kubale (2004), "Graph Colorings", Ch. 1 (interval graphs, first-fit colouring)

use std::collections::BTreeSet;

use log::trace;

use crate::models::{ColumnAssignment, Session};

/// Assigns columns to the sessions of a single day.
///
/// Sessions are expected to share a day; the day field is not inspected.
/// Returns one assignment per input session, **in input order**.
/// Duplicate ids are laid out independently (nodes are keyed by position).
///
/// # Example
/// ```
/// use u_timetable::models::Session;
/// use u_timetable::overlap::resolve_day;
///
/// let day = vec![
///     Session::new("A", 0, 9.0, 10.0),
///     Session::new("B", 0, 9.5, 10.5),
/// ];
/// let cols = resolve_day(&day);
/// assert_eq!(cols[0].column, 0);
/// assert_eq!(cols[1].column, 1);
/// assert!(cols.iter().all(|c| c.total_columns == 2));
/// ```
pub fn resolve_day(sessions: &[Session]) -> Vec<ColumnAssignment> {
    match sessions.len() {
        0 => return Vec::new(),
        1 => {
            return vec![ColumnAssignment {
                session_id: sessions[0].id.clone(),
                column: 0,
                total_columns: 1,
            }]
        }
        _ => {}
    }

    let order = processing_order(sessions);
    let neighbors = overlap_neighbors(sessions);

    let mut columns: Vec<Option<usize>> = vec![None; sessions.len()];
    for &idx in &order {
        let taken: BTreeSet<usize> = neighbors[idx]
            .iter()
            .filter_map(|&n| columns[n])
            .collect();
        let column = (0usize..).find(|c| !taken.contains(c)).unwrap_or(0);
        columns[idx] = Some(column);
    }

    let columns: Vec<usize> = columns.into_iter().map(|c| c.unwrap_or(0)).collect();

    sessions
        .iter()
        .enumerate()
        .map(|(idx, session)| {
            let mut distinct: BTreeSet<usize> =
                neighbors[idx].iter().map(|&n| columns[n]).collect();
            distinct.insert(columns[idx]);
            trace!(
                "session {} -> column {} of {} ({} neighbours)",
                session.id,
                columns[idx],
                distinct.len(),
                neighbors[idx].len()
            );
            ColumnAssignment {
                session_id: session.id.clone(),
                column: columns[idx],
                total_columns: distinct.len(),
            }
        })
        .collect()
}

/// Indices in processing order: start ascending, duration descending.
///
/// `sort_by` is stable, so exact ties keep input order.
fn processing_order(sessions: &[Session]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sessions.len()).collect();
    order.sort_by(|&a, &b| {
        let (sa, sb) = (&sessions[a], &sessions[b]);
        sa.start_hour
            .total_cmp(&sb.start_hour)
            .then_with(|| sb.duration_hours().total_cmp(&sa.duration_hours()))
    });
    order
}

/// Direct-overlap adjacency lists, indexed by input position.
fn overlap_neighbors(sessions: &[Session]) -> Vec<Vec<usize>> {
    let mut neighbors = vec![Vec::new(); sessions.len()];
    for i in 0..sessions.len() {
        for j in (i + 1)..sessions.len() {
            if sessions[i].overlaps(&sessions[j]) {
                neighbors[i].push(j);
                neighbors[j].push(i);
            }
        }
    }
    neighbors
}
