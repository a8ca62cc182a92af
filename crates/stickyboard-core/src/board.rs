//! Board state: the ordered collection of notes.

use crate::category::ALL_CATEGORY;
use crate::note::{Note, NoteId};
use serde::{Deserialize, Serialize};

/// The authoritative ordered sequence of notes.
///
/// Sequence order is z-order: a later index is drawn on top. The board
/// is owned by the surrounding controller and passed by reference into
/// each layout operation for the duration of that operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardState {
    notes: Vec<Note>,
}

impl BoardState {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a board from persisted notes. Editing flags are cleared;
    /// they are transient UI state.
    pub fn from_notes(mut notes: Vec<Note>) -> Self {
        for note in &mut notes {
            note.editing = false;
        }
        Self { notes }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// All notes in z-order (back to front).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub(crate) fn notes_mut(&mut self) -> &mut [Note] {
        &mut self.notes
    }

    /// Append a note, making it topmost.
    pub fn add(&mut self, note: Note) -> NoteId {
        let id = note.id();
        self.notes.push(note);
        id
    }

    /// Remove a note. Returns it, or `None` if the id is stale.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        let idx = self.index_of(id)?;
        Some(self.notes.remove(idx))
    }

    /// Get a note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Get a mutable note by id.
    pub fn get_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id() == id)
    }

    /// Apply a patch to one note. A stale id is a no-op and returns
    /// `false` rather than failing the board.
    pub fn update<F: FnOnce(&mut Note)>(&mut self, id: NoteId, patch: F) -> bool {
        match self.get_mut(id) {
            Some(note) => {
                patch(note);
                true
            }
            None => {
                log::warn!("update on unknown note {id}");
                false
            }
        }
    }

    /// Index of a note in the sequence, which is also its z-order.
    pub fn z_index(&self, id: NoteId) -> Option<usize> {
        self.index_of(id)
    }

    fn index_of(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id() == id)
    }

    /// Move a note to the end of the sequence so it draws on top.
    pub fn bring_to_front(&mut self, id: NoteId) -> bool {
        match self.index_of(id) {
            Some(idx) => {
                let note = self.notes.remove(idx);
                self.notes.push(note);
                true
            }
            None => false,
        }
    }

    /// Clear every note's editing flag.
    pub fn end_editing_all(&mut self) {
        for note in &mut self.notes {
            note.editing = false;
        }
    }

    /// Notes visible under a category filter, in z-order.
    pub fn visible<'a>(&'a self, filter: &'a str) -> impl Iterator<Item = &'a Note> {
        self.notes
            .iter()
            .filter(move |n| filter == ALL_CATEGORY || n.category == filter)
    }

    /// Ids of the notes visible under a category filter.
    pub fn visible_ids(&self, filter: &str) -> Vec<NoteId> {
        self.visible(filter).map(Note::id).collect()
    }

    /// An owned copy of the current notes, for persistence.
    pub fn snapshot(&self) -> Vec<Note> {
        self.notes.clone()
    }
}
