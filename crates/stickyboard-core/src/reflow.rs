//! Reflow: restores the board's geometric invariants.
//!
//! Runs after creation, deletion, drag end, and resize end. Both
//! policies are deterministic and idempotent, and neither reorders the
//! note sequence; z-order is owned by the board, reflow only moves
//! geometry.

use crate::board::BoardState;
use crate::config::LayoutConfig;
use crate::geometry::{Column, clamp, column_of};
use crate::note::NoteId;
use crate::placement::{default_side, fits_two_columns};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Rows closer than this in y count as the same row when ordering
/// notes for the strict grid.
const ROW_TOLERANCE: f64 = 1.0;

/// Which layout the resolver packs the board into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReflowMode {
    /// Uniform cells in reading order. Drops free-drag fine positioning.
    StrictGrid,
    /// Per-column packing that keeps each note's size and column,
    /// compacting vertical gaps only.
    #[default]
    FreeMasonry,
}

/// Re-pack the visible notes and recompute the scrollable canvas
/// height.
///
/// `visible` is the category-filtered subset the layout acts on;
/// hidden notes keep their geometry. `canvas.width` is the canvas
/// width, `canvas.height` the viewport height the scroll extent is
/// floored at. Returns the new canvas height.
pub fn reflow(
    board: &mut BoardState,
    visible: &[NoteId],
    config: &LayoutConfig,
    canvas: Size,
) -> f64 {
    let indices: Vec<usize> = board
        .notes()
        .iter()
        .enumerate()
        .filter(|(_, n)| visible.contains(&n.id()))
        .map(|(i, _)| i)
        .collect();

    match config.reflow_mode {
        ReflowMode::StrictGrid => pack_grid(board, &indices, config, canvas.width),
        ReflowMode::FreeMasonry => pack_masonry(board, &indices, config, canvas.width),
    }

    canvas_height(board, config, canvas.height)
}

/// Scroll extent: bottom of the lowest note plus one gap, never below
/// the viewport height.
pub fn canvas_height(board: &BoardState, config: &LayoutConfig, viewport_height: f64) -> f64 {
    let max_bottom = board
        .notes()
        .iter()
        .map(|n| n.bottom())
        .fold(f64::NEG_INFINITY, f64::max);
    if max_bottom.is_finite() {
        (max_bottom + config.spacing).max(viewport_height)
    } else {
        viewport_height
    }
}

/// Strict grid: order by (y, then x) and reassign fixed cells.
fn pack_grid(board: &mut BoardState, indices: &[usize], config: &LayoutConfig, canvas_width: f64) {
    let side = default_side(canvas_width, config);
    let step = side + config.spacing;
    let cols = if fits_two_columns(canvas_width, config) { 2 } else { 1 };

    let mut order = indices.to_vec();
    let notes = board.notes();
    order.sort_by(|&a, &b| {
        let (na, nb) = (&notes[a], &notes[b]);
        if (na.position.y - nb.position.y).abs() > ROW_TOLERANCE {
            na.position.y.partial_cmp(&nb.position.y).unwrap_or(Ordering::Equal)
        } else {
            na.position.x.partial_cmp(&nb.position.x).unwrap_or(Ordering::Equal)
        }
    });

    let notes = board.notes_mut();
    for (k, &idx) in order.iter().enumerate() {
        let row = k / cols;
        let col = k % cols;
        notes[idx].position = Point::new(
            config.spacing + col as f64 * step,
            config.top_safe_inset + row as f64 * step,
        );
    }
}

/// Free masonry: clamp into bounds, then compact each column from the
/// top, preserving sizes and column membership. Residual overlap across
/// the column boundary is accepted as a display approximation.
fn pack_masonry(
    board: &mut BoardState,
    indices: &[usize],
    config: &LayoutConfig,
    canvas_width: f64,
) {
    let top_y = config.top_y();
    let notes = board.notes_mut();

    for &idx in indices {
        let note = &mut notes[idx];
        note.position.x = clamp(
            note.position.x,
            config.spacing,
            canvas_width - note.size.width - config.spacing,
        );
        note.position.y = note.position.y.max(top_y);
    }

    let mut left = Vec::new();
    let mut right = Vec::new();
    for &idx in indices {
        match column_of(notes[idx].position.x, canvas_width) {
            Column::Left => left.push(idx),
            Column::Right => right.push(idx),
        }
    }

    for column in [left, right] {
        let mut order = column;
        order.sort_by(|&a, &b| {
            notes[a]
                .position
                .y
                .partial_cmp(&notes[b].position.y)
                .unwrap_or(Ordering::Equal)
        });
        let mut running = top_y;
        for idx in order {
            notes[idx].position.y = running;
            running += notes[idx].size.height + config.spacing;
        }
    }
}
