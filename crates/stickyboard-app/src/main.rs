//! Headless demo driver for the board engine.
//!
//! Loads the persisted board, runs a short scripted session through
//! the controller, and prints the resulting layout. Useful for
//! exercising the engine end to end without a UI host.

use kurbo::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use stickyboard_core::storage::{
    CommitSaver, FileStorage, MemoryStorage, NoteStore, load_categories_or_default,
    load_notes_or_empty,
};
use stickyboard_core::{BoardController, BoardState, LayoutConfig};

const CANVAS_WIDTH: f64 = 390.0;
const VIEWPORT_HEIGHT: f64 = 800.0;

fn main() {
    env_logger::init();
    log::info!("Starting StickyBoard");

    pollster::block_on(run());
}

async fn run() {
    let store: Arc<dyn NoteStore> = match FileStorage::default_location() {
        Ok(storage) => {
            log::info!("storing board under {}", storage.base_path().display());
            Arc::new(storage)
        }
        Err(e) => {
            log::warn!("no writable data directory ({e}), running in memory");
            Arc::new(MemoryStorage::new())
        }
    };

    let notes = load_notes_or_empty(store.as_ref()).await;
    let categories = load_categories_or_default(store.as_ref()).await;
    log::info!(
        "loaded {} notes, {} categories",
        notes.len(),
        categories.names().len()
    );

    let mut controller =
        BoardController::with_board(BoardState::from_notes(notes), LayoutConfig::default());
    *controller.categories_mut() = categories;
    controller.set_viewport_size(CANVAS_WIDTH, VIEWPORT_HEIGHT);

    // Persist after every committed operation
    let saver = Rc::new(RefCell::new(CommitSaver::new(store.clone())));
    let hook_saver = saver.clone();
    controller.set_on_commit(Box::new(move |board| {
        let mut saver = hook_saver.borrow_mut();
        saver.mark_dirty();
        pollster::block_on(saver.commit(board.notes()));
    }));

    let first = controller.create_note("Work");
    let second = controller.create_note("Work");
    controller.create_note("Ideas");

    controller.begin_drag(first);
    controller.update_drag(Vec2::new(0.0, 260.0));
    controller.end_drag();

    controller.begin_resize(second);
    controller.update_resize(Vec2::new(0.0, 80.0));
    controller.end_resize();

    controller.set_category_filter("Work");
    log::info!(
        "filter=Work shows {} of {} notes",
        controller.visible_notes().len(),
        controller.board().len()
    );
    controller.set_category_filter("All");

    controller.delete_note(second);

    for note in controller.visible_notes() {
        log::info!(
            "note {} [{}] at ({:.0}, {:.0}) size {:.0}x{:.0}",
            note.id(),
            note.category,
            note.position.x,
            note.position.y,
            note.size.width,
            note.size.height,
        );
    }
    log::info!("canvas height: {:.0}", controller.canvas_height());

    saver
        .borrow()
        .save_categories(controller.categories().names())
        .await;
    log::info!("session saved");
}
