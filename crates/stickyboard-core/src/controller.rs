//! Board controller: owns the board, routes gestures, and runs reflow.
//!
//! The controller is the single owner of [`BoardState`] for a session.
//! Continuous gesture updates mutate geometry in place; every discrete
//! action (create, delete, gesture end) runs the overlap resolver and
//! fires the on-commit hook exactly once, so persistence happens per
//! operation rather than per input event.

use crate::board::BoardState;
use crate::category::{ALL_CATEGORY, CategoryList};
use crate::config::LayoutConfig;
use crate::drag::DragGesture;
use crate::note::{Note, NoteId};
use crate::placement::place_new_note;
use crate::reflow::reflow;
use crate::resize::ResizeGesture;
use kurbo::{Size, Vec2};

/// Hook fired after each committed operation.
pub type CommitHook = Box<dyn FnMut(&BoardState)>;

/// The one gesture the event loop can have active at a time.
#[derive(Debug, Clone)]
enum Gesture {
    Drag(DragGesture),
    Resize(ResizeGesture),
}

/// Owns the board and applies user operations to it.
pub struct BoardController {
    board: BoardState,
    config: LayoutConfig,
    categories: CategoryList,
    /// Canvas width and viewport height.
    viewport: Size,
    /// Current scrollable extent, maintained by reflow.
    canvas_height: f64,
    /// Active category filter.
    filter: String,
    gesture: Option<Gesture>,
    on_commit: Option<CommitHook>,
}

impl BoardController {
    /// Create a controller over an empty board.
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_board(BoardState::new(), config)
    }

    /// Create a controller over an existing board, clamping its notes
    /// into the current layout immediately.
    pub fn with_board(board: BoardState, config: LayoutConfig) -> Self {
        let mut controller = Self {
            board,
            config,
            categories: CategoryList::default(),
            viewport: Size::new(800.0, 600.0),
            canvas_height: 600.0,
            filter: ALL_CATEGORY.to_string(),
            gesture: None,
            on_commit: None,
        };
        controller.reflow_now();
        controller
    }

    /// Register the hook fired once per committed operation.
    pub fn set_on_commit(&mut self, hook: CommitHook) {
        self.on_commit = Some(hook);
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn categories(&self) -> &CategoryList {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut CategoryList {
        &mut self.categories
    }

    /// Current scrollable canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Update canvas width / viewport height and re-clamp the layout.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
        self.reflow_now();
        self.commit();
    }

    /// Set the active category filter. Layout operations act on the
    /// filtered subset only.
    pub fn set_category_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn category_filter(&self) -> &str {
        &self.filter
    }

    /// Notes visible under the current filter, in z-order.
    pub fn visible_notes(&self) -> Vec<&Note> {
        self.board.visible(&self.filter).collect()
    }

    /// Create a note in the shortest column and commit.
    pub fn create_note(&mut self, category: &str) -> NoteId {
        self.board.end_editing_all();
        let note = place_new_note(
            self.board.visible(&self.filter),
            &self.config,
            self.viewport.width,
            category,
        );
        let id = self.board.add(note);
        self.reflow_now();
        self.commit();
        id
    }

    /// Delete a note and close the gap. A stale id is a no-op.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        if self.board.remove(id).is_none() {
            log::warn!("delete on unknown note {id}");
            return false;
        }
        // An in-flight gesture on the deleted note dies with it.
        if self.gesture_target() == Some(id) {
            self.gesture = None;
        }
        self.reflow_now();
        self.commit();
        true
    }

    /// Begin dragging a note. Fails if another gesture is active or the
    /// id is stale.
    pub fn begin_drag(&mut self, id: NoteId) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        match DragGesture::begin(&self.board, id) {
            Some(drag) => {
                self.gesture = Some(Gesture::Drag(drag));
                true
            }
            None => false,
        }
    }

    /// Apply a drag movement. Commits the note's position immediately;
    /// no reflow until the gesture ends.
    pub fn update_drag(&mut self, translation: Vec2) -> bool {
        let Some(Gesture::Drag(drag)) = self.gesture.clone() else {
            return false;
        };
        let visible = self.board.visible_ids(&self.filter);
        drag.update(
            &mut self.board,
            &visible,
            &self.config,
            self.viewport.width,
            translation,
        )
    }

    /// Finish the drag: discard the origin, reflow, commit.
    pub fn end_drag(&mut self) -> bool {
        match self.gesture.take() {
            Some(Gesture::Drag(_)) => {
                self.reflow_now();
                self.commit();
                true
            }
            other => {
                self.gesture = other;
                false
            }
        }
    }

    /// Cancel the drag. The last committed position stands; no reflow
    /// runs until the next operation.
    pub fn cancel_drag(&mut self) {
        if matches!(self.gesture, Some(Gesture::Drag(_))) {
            self.gesture = None;
        }
    }

    /// Begin resizing a note.
    pub fn begin_resize(&mut self, id: NoteId) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        match ResizeGesture::begin(&self.board, id) {
            Some(resize) => {
                self.gesture = Some(Gesture::Resize(resize));
                true
            }
            None => false,
        }
    }

    /// Apply a resize delta to the active gesture.
    pub fn update_resize(&mut self, delta: Vec2) -> bool {
        let Some(Gesture::Resize(resize)) = self.gesture.clone() else {
            return false;
        };
        resize.update(&mut self.board, &self.config, self.viewport.width, delta)
    }

    /// Finish the resize: reflow and commit.
    pub fn end_resize(&mut self) -> bool {
        match self.gesture.take() {
            Some(Gesture::Resize(_)) => {
                self.reflow_now();
                self.commit();
                true
            }
            other => {
                self.gesture = other;
                false
            }
        }
    }

    /// Cancel the resize, keeping the last committed size.
    pub fn cancel_resize(&mut self) {
        if matches!(self.gesture, Some(Gesture::Resize(_))) {
            self.gesture = None;
        }
    }

    /// Put a note into editing mode and raise it above anything it may
    /// overlap while being edited.
    pub fn start_editing(&mut self, id: NoteId) -> bool {
        if !self.board.bring_to_front(id) {
            return false;
        }
        self.board.end_editing_all();
        self.board.update(id, |n| n.editing = true)
    }

    /// Leave editing mode on all notes.
    pub fn stop_editing(&mut self) {
        self.board.end_editing_all();
    }

    /// Run the overlap resolver over the visible subset and refresh the
    /// canvas height. Safe to call at any time; idempotent.
    pub fn reflow_now(&mut self) {
        let visible = self.board.visible_ids(&self.filter);
        self.canvas_height = reflow(&mut self.board, &visible, &self.config, self.viewport);
    }

    fn gesture_target(&self) -> Option<NoteId> {
        match &self.gesture {
            Some(Gesture::Drag(d)) => Some(d.note_id()),
            Some(Gesture::Resize(r)) => Some(r.note_id()),
            None => None,
        }
    }

    fn commit(&mut self) {
        if let Some(hook) = &mut self.on_commit {
            hook(&self.board);
        }
        // Height never trails a commit: reflow ran first, but deletion
        // of the last note must still respect the viewport floor.
        debug_assert!(self.canvas_height >= self.viewport.height);
    }
}

impl std::fmt::Debug for BoardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardController")
            .field("notes", &self.board.len())
            .field("filter", &self.filter)
            .field("canvas_height", &self.canvas_height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::intersects;
    use std::cell::RefCell;
    use std::rc::Rc;

    const W: f64 = 390.0;
    const H: f64 = 800.0;

    fn controller() -> BoardController {
        let config = LayoutConfig {
            spacing: 10.0,
            top_safe_inset: 40.0,
            ..Default::default()
        };
        let mut c = BoardController::new(config);
        c.set_viewport_size(W, H);
        c
    }

    #[test]
    fn test_create_places_two_columns() {
        let mut c = controller();
        let a = c.create_note("Work");
        let b = c.create_note("Work");

        let pa = c.board().get(a).unwrap().position;
        let pb = c.board().get(b).unwrap().position;
        assert_eq!(pa.y, pb.y);
        assert!(pa.x < pb.x);
    }

    #[test]
    fn test_create_never_overlaps() {
        let mut c = controller();
        for _ in 0..7 {
            c.create_note("Work");
        }
        let notes = c.board().notes();
        for (i, a) in notes.iter().enumerate() {
            for b in notes.iter().skip(i + 1) {
                assert!(!intersects(a.rect(), b.rect()));
            }
        }
    }

    #[test]
    fn test_canvas_height_grows_monotonically() {
        let mut c = controller();
        let mut last = c.canvas_height();
        for _ in 0..8 {
            c.create_note("Work");
            let height = c.canvas_height();
            assert!(height >= last);
            last = height;
        }
    }

    #[test]
    fn test_delete_last_note_keeps_viewport_floor() {
        let mut c = controller();
        let id = c.create_note("Work");
        assert!(c.delete_note(id));
        assert_eq!(c.canvas_height(), H);
    }

    #[test]
    fn test_delete_stale_id_is_noop() {
        let mut c = controller();
        c.create_note("Work");
        let commits = Rc::new(RefCell::new(0));
        let counter = commits.clone();
        c.set_on_commit(Box::new(move |_| *counter.borrow_mut() += 1));

        assert!(!c.delete_note(uuid::Uuid::new_v4()));
        assert_eq!(*commits.borrow(), 0);
    }

    #[test]
    fn test_one_gesture_at_a_time() {
        let mut c = controller();
        let a = c.create_note("Work");
        let b = c.create_note("Work");

        assert!(c.begin_drag(a));
        assert!(!c.begin_drag(b));
        assert!(!c.begin_resize(b));
        assert!(c.end_drag());
        assert!(c.begin_resize(b));
    }

    #[test]
    fn test_drag_commits_on_end_only() {
        let mut c = controller();
        let a = c.create_note("Work");
        c.create_note("Work");

        let commits = Rc::new(RefCell::new(0));
        let counter = commits.clone();
        c.set_on_commit(Box::new(move |_| *counter.borrow_mut() += 1));

        assert!(c.begin_drag(a));
        for i in 1..=5 {
            assert!(c.update_drag(Vec2::new(i as f64 * 4.0, i as f64 * 30.0)));
        }
        assert_eq!(*commits.borrow(), 0);
        assert!(c.end_drag());
        assert_eq!(*commits.borrow(), 1);
    }

    #[test]
    fn test_drag_end_restores_invariants() {
        let mut c = controller();
        let a = c.create_note("Work");
        let b = c.create_note("Work");

        c.begin_drag(a);
        // Drop note a on top of note b
        let target = c.board().get(b).unwrap().position;
        let origin = c.board().get(a).unwrap().position;
        c.update_drag(Vec2::new(target.x - origin.x, target.y - origin.y));
        c.end_drag();

        let ra = c.board().get(a).unwrap().rect();
        let rb = c.board().get(b).unwrap().rect();
        assert!(!intersects(ra, rb));
    }

    #[test]
    fn test_cancel_drag_keeps_last_position() {
        let mut c = controller();
        let a = c.create_note("Work");
        c.begin_drag(a);
        c.update_drag(Vec2::new(0.0, 200.0));
        let committed = c.board().get(a).unwrap().position;
        c.cancel_drag();
        assert_eq!(c.board().get(a).unwrap().position, committed);
        // The gesture is gone; a new one may start
        assert!(c.begin_drag(a));
    }

    #[test]
    fn test_delete_during_gesture_kills_gesture() {
        let mut c = controller();
        let a = c.create_note("Work");
        c.begin_drag(a);
        assert!(c.delete_note(a));
        assert!(!c.update_drag(Vec2::new(1.0, 1.0)));
        assert!(!c.end_drag());
    }

    #[test]
    fn test_resize_then_reflow_repacks_column() {
        let mut c = controller();
        let a = c.create_note("Work");
        let b = c.create_note("Work");
        let third = c.create_note("Work"); // below a in the left column
        assert_eq!(
            c.board().get(third).unwrap().position.x,
            c.board().get(a).unwrap().position.x
        );

        c.begin_resize(a);
        c.update_resize(Vec2::new(0.0, -40.0));
        c.end_resize();

        // Third note moved up to sit right below the shrunken first
        let a_note = c.board().get(a).unwrap();
        let third_note = c.board().get(third).unwrap();
        assert_eq!(third_note.position.y, a_note.bottom() + c.config().spacing);
        let _ = b;
    }

    #[test]
    fn test_start_editing_brings_to_front() {
        let mut c = controller();
        let a = c.create_note("Work");
        let b = c.create_note("Work");

        assert!(c.start_editing(a));
        assert_eq!(c.board().z_index(a), Some(1));
        assert_eq!(c.board().z_index(b), Some(0));
        assert!(c.board().get(a).unwrap().editing);

        c.stop_editing();
        assert!(!c.board().get(a).unwrap().editing);
    }

    #[test]
    fn test_filtered_operations_leave_hidden_notes_alone() {
        let mut c = controller();
        let hidden = c.create_note("Ideas");
        c.set_category_filter("Work");
        let hidden_pos = c.board().get(hidden).unwrap().position;

        let visible = c.create_note("Work");
        // Filter active: the Work note ignores the Ideas note's column
        // fill and starts at the top
        assert_eq!(
            c.board().get(visible).unwrap().position.y,
            c.config().top_y()
        );
        assert_eq!(c.board().get(hidden).unwrap().position, hidden_pos);
        assert_eq!(c.visible_notes().len(), 1);
    }

    #[test]
    fn test_reflow_now_idempotent() {
        let mut c = controller();
        for _ in 0..4 {
            c.create_note("Work");
        }
        let before: Vec<_> = c.board().notes().iter().map(|n| n.position).collect();
        let h_before = c.canvas_height();
        c.reflow_now();
        let after: Vec<_> = c.board().notes().iter().map(|n| n.position).collect();
        assert_eq!(before, after);
        assert_eq!(h_before, c.canvas_height());
    }
}
