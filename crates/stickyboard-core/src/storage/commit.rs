//! Per-operation persistence.
//!
//! The board saves after every committed operation rather than on a
//! timer: each discrete action marks the saver dirty and the host
//! drives `commit` at a convenient point in its loop. Failures are
//! logged and leave the dirty flag set so the next commit retries.

use crate::note::Note;
use crate::storage::NoteStore;
use std::sync::Arc;

/// Writes the board through a storage backend, once per operation.
pub struct CommitSaver<S: NoteStore + ?Sized> {
    storage: Arc<S>,
    dirty: bool,
}

impl<S: NoteStore + ?Sized> CommitSaver<S> {
    /// Create a saver over the given storage backend.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            dirty: false,
        }
    }

    /// Mark the board as having unsaved changes.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether the board has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the notes out if dirty. Returns whether a save happened.
    ///
    /// A failed write logs and stays dirty; persistence problems never
    /// interrupt board interaction.
    pub async fn commit(&mut self, notes: &[Note]) -> bool {
        if !self.dirty {
            return false;
        }
        match self.storage.save_notes(notes).await {
            Ok(()) => {
                self.dirty = false;
                true
            }
            Err(e) => {
                log::warn!("failed to save notes: {e}");
                false
            }
        }
    }

    /// Write the category list out immediately.
    pub async fn save_categories(&self, names: &[String]) -> bool {
        match self.storage.save_categories(names).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to save categories: {e}");
                false
            }
        }
    }

    /// Get a reference to the storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}
