//! Live resize handling for a single note.
//!
//! Resizing only grows or shrinks the note in place, bounded by the
//! right canvas edge and the minimum note size. Height is unbounded
//! below because the canvas scrolls vertically. Any overlap introduced
//! is resolved by the reflow at gesture end.

use crate::board::BoardState;
use crate::config::LayoutConfig;
use crate::geometry::clamp;
use crate::note::NoteId;
use kurbo::{Size, Vec2};

/// An active resize gesture. Dropping it cancels the gesture with the
/// last committed size left standing.
#[derive(Debug, Clone)]
pub struct ResizeGesture {
    note_id: NoteId,
    origin: Size,
}

impl ResizeGesture {
    /// Capture the note's size at gesture start. Returns `None` for a
    /// stale id.
    pub fn begin(board: &BoardState, id: NoteId) -> Option<Self> {
        let note = board.get(id)?;
        Some(Self {
            note_id: id,
            origin: note.size,
        })
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    /// Commit a resize update. Stale ids are a no-op.
    pub fn update(
        &self,
        board: &mut BoardState,
        config: &LayoutConfig,
        canvas_width: f64,
        delta: Vec2,
    ) -> bool {
        let Some(note) = board.get(self.note_id) else {
            log::warn!("resize update on unknown note {}", self.note_id);
            return false;
        };

        let max_width = canvas_width - note.position.x - config.spacing;
        let width = clamp(self.origin.width + delta.x, config.min_note_size, max_width);
        let height = (self.origin.height + delta.y).max(config.min_note_size);

        board.update(self.note_id, |n| n.size = Size::new(width, height))
    }
}
