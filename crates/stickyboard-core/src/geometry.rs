//! Geometry helpers shared by placement, drag, and reflow.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Restrict `value` to `[min, max]`.
///
/// Degenerate bounds (`min > max`) resolve to `min`: the canvas is too
/// small for the note and the smaller bound wins.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if min > max {
        return min;
    }
    value.max(min).min(max)
}

/// Strict axis-aligned overlap test. Touching edges do not count.
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Which of the two layout columns a note belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Left,
    Right,
}

/// Classify an x coordinate against the canvas midline. Ties go left.
pub fn column_of(x: f64, canvas_width: f64) -> Column {
    if x <= canvas_width / 2.0 {
        Column::Left
    } else {
        Column::Right
    }
}

/// Rectangle from a top-left origin and a size.
pub fn rect_at(origin: Point, size: Size) -> Rect {
    Rect::new(origin.x, origin.y, origin.x + size.width, origin.y + size.height)
}
