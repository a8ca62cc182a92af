//! Placement of newly created notes.
//!
//! Greedy shortest-column placement: the new note lands at the bottom
//! of whichever column is currently shorter. This approximates balanced
//! packing without repacking the whole board and yields a masonry
//! layout as note heights diverge.

use crate::config::LayoutConfig;
use crate::geometry::{Column, clamp, column_of};
use crate::note::Note;
use kurbo::{Point, Size};

/// Side length for a freshly created square note.
///
/// Two columns split the canvas width minus three gaps. If that leaves
/// less than the minimum note size the canvas is too narrow for two
/// columns, and the note takes a single full-width column instead of
/// going negative.
pub fn default_side(canvas_width: f64, config: &LayoutConfig) -> f64 {
    let side = (canvas_width - 3.0 * config.spacing) / 2.0;
    if side < config.min_note_size {
        clamp(canvas_width - 2.0 * config.spacing, config.min_note_size, f64::INFINITY)
    } else {
        side
    }
}

/// Whether the canvas is wide enough for the two-column layout.
pub fn fits_two_columns(canvas_width: f64, config: &LayoutConfig) -> bool {
    (canvas_width - 3.0 * config.spacing) / 2.0 >= config.min_note_size
}

/// Filled height of each column: bottom of the lowest note plus one
/// gap, or the top inset for an empty column.
pub fn column_fill_heights<'a>(
    notes: impl Iterator<Item = &'a Note>,
    config: &LayoutConfig,
    canvas_width: f64,
) -> (f64, f64) {
    let top_y = config.top_y();
    let mut left = top_y;
    let mut right = top_y;
    for note in notes {
        let fill = note.bottom() + config.spacing;
        match column_of(note.position.x, canvas_width) {
            Column::Left => left = left.max(fill),
            Column::Right => right = right.max(fill),
        }
    }
    (left, right)
}

/// Choose position and size for a new note given the visible notes.
///
/// The returned note is not yet on the board; the caller appends it
/// (making it topmost) and runs a reflow.
pub fn place_new_note<'a>(
    notes: impl Iterator<Item = &'a Note>,
    config: &LayoutConfig,
    canvas_width: f64,
    category: &str,
) -> Note {
    let side = default_side(canvas_width, config);
    let (left, right) = column_fill_heights(notes, config, canvas_width);

    // Tie goes to the left column. A canvas too narrow for two columns
    // always stacks on the left.
    let place_left = !fits_two_columns(canvas_width, config) || left <= right;
    let (x, y) = if place_left {
        (config.spacing, left)
    } else {
        (config.spacing * 2.0 + side, right)
    };

    Note::new(Point::new(x, y), Size::new(side, side), category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardState;

    const W: f64 = 390.0;

    fn config() -> LayoutConfig {
        LayoutConfig {
            spacing: 10.0,
            top_safe_inset: 40.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_side() {
        let config = config();
        assert_eq!(default_side(W, &config), (W - 30.0) / 2.0);
    }

    #[test]
    fn test_default_side_narrow_canvas() {
        let config = config();
        // Too narrow for two columns: single column, never negative
        let side = default_side(200.0, &config);
        assert_eq!(side, 200.0 - 2.0 * config.spacing);
        assert!(!fits_two_columns(200.0, &config));

        // Narrower than even one column: min size wins
        let side = default_side(100.0, &config);
        assert_eq!(side, config.min_note_size);
    }

    #[test]
    fn test_first_note_lands_top_left() {
        let config = config();
        let board = BoardState::new();
        let note = place_new_note(board.notes().iter(), &config, W, "Work");
        assert_eq!(note.position, Point::new(10.0, 50.0));
        assert_eq!(note.size.width, (W - 30.0) / 2.0);
    }

    #[test]
    fn test_second_note_lands_top_right_same_y() {
        let config = config();
        let mut board = BoardState::new();
        board.add(place_new_note(board.notes().iter(), &config, W, "Work"));
        let second = place_new_note(board.notes().iter(), &config, W, "Work");

        let side = default_side(W, &config);
        assert_eq!(second.position, Point::new(20.0 + side, 50.0));
    }

    #[test]
    fn test_third_note_returns_to_shorter_column() {
        let config = config();
        let mut board = BoardState::new();
        for _ in 0..2 {
            board.add(place_new_note(board.notes().iter(), &config, W, "Work"));
        }
        // Shrink the right note so the right column is shorter
        let right_id = board.notes()[1].id();
        board.update(right_id, |n| n.size.height = 60.0);

        let third = place_new_note(board.notes().iter(), &config, W, "Work");
        let side = default_side(W, &config);
        assert_eq!(third.position.x, 20.0 + side);
        assert_eq!(third.position.y, 50.0 + 60.0 + 10.0);
    }

    #[test]
    fn test_fill_heights_empty_board() {
        let config = config();
        let board = BoardState::new();
        let (left, right) = column_fill_heights(board.notes().iter(), &config, W);
        assert_eq!(left, config.top_y());
        assert_eq!(right, config.top_y());
    }

    #[test]
    fn test_narrow_canvas_stacks_single_column() {
        let config = config();
        let mut board = BoardState::new();
        let first = place_new_note(board.notes().iter(), &config, 200.0, "Work");
        board.add(first);
        let second = place_new_note(board.notes().iter(), &config, 200.0, "Work");
        assert_eq!(second.position.x, config.spacing);
        assert!(second.position.y > board.notes()[0].bottom());
    }
}
