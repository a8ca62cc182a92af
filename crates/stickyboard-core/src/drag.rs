//! Live drag handling for a single note.
//!
//! While a drag is active the note follows the pointer with its
//! position clamped into canvas bounds and softly pushed off other
//! notes. No reflow runs mid-drag; blocking or repacking under the
//! pointer fights the user's input. The full no-overlap invariant is
//! restored by the reflow the controller runs at gesture end.

use crate::board::BoardState;
use crate::config::LayoutConfig;
use crate::geometry::{clamp, intersects, rect_at};
use crate::note::NoteId;
use kurbo::{Point, Vec2};

/// An active drag gesture. Exists only between gesture start and end;
/// dropping it cancels the gesture with the last committed position
/// left standing.
#[derive(Debug, Clone)]
pub struct DragGesture {
    note_id: NoteId,
    origin: Point,
}

impl DragGesture {
    /// Capture the dragged note's position at gesture start.
    /// Returns `None` for a stale id.
    pub fn begin(board: &BoardState, id: NoteId) -> Option<Self> {
        let note = board.get(id)?;
        Some(Self {
            note_id: id,
            origin: note.position,
        })
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    /// Position the captured origin would move to under `translation`,
    /// after clamping and soft collision avoidance against `visible`.
    ///
    /// Avoidance is one pass: each other note whose rectangle, expanded
    /// by the safety margin, still intersects the candidate pushes it
    /// down by that margin. One pass bounds the cost per input event.
    pub fn candidate_position(
        &self,
        board: &BoardState,
        visible: &[NoteId],
        config: &LayoutConfig,
        canvas_width: f64,
        translation: Vec2,
    ) -> Option<Point> {
        let note = board.get(self.note_id)?;
        let size = note.size;

        let x = clamp(
            self.origin.x + translation.x,
            config.spacing,
            canvas_width - size.width - config.spacing,
        );
        let mut y = (self.origin.y + translation.y).max(config.top_y());

        let safe = config.safe_distance;
        for other in board.notes() {
            if other.id() == self.note_id || !visible.contains(&other.id()) {
                continue;
            }
            let inflated = other.rect().inflate(safe, safe);
            if intersects(rect_at(Point::new(x, y), size), inflated) {
                y += safe;
            }
        }

        Some(Point::new(x, y))
    }

    /// Commit a movement update. Stale ids are a no-op.
    pub fn update(
        &self,
        board: &mut BoardState,
        visible: &[NoteId],
        config: &LayoutConfig,
        canvas_width: f64,
        translation: Vec2,
    ) -> bool {
        let Some(position) = self.candidate_position(board, visible, config, canvas_width, translation)
        else {
            log::warn!("drag update on unknown note {}", self.note_id);
            return false;
        };
        board.update(self.note_id, |n| n.position = position)
    }
}
