//! StickyBoard Core Library
//!
//! Platform-agnostic layout and interaction engine for a sticky-note
//! board: column placement, drag and resize gestures, overlap
//! resolution, and board persistence.

pub mod board;
pub mod category;
pub mod config;
pub mod controller;
pub mod drag;
pub mod geometry;
pub mod note;
pub mod placement;
pub mod reflow;
pub mod resize;
pub mod storage;

pub use board::BoardState;
pub use category::{ALL_CATEGORY, CategoryList};
pub use config::LayoutConfig;
pub use controller::BoardController;
pub use drag::DragGesture;
pub use note::{DEFAULT_CATEGORY, Note, NoteId};
pub use placement::{default_side, place_new_note};
pub use reflow::{ReflowMode, canvas_height, reflow};
pub use resize::ResizeGesture;
