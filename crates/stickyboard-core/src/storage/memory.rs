//! In-memory storage implementation.

use super::{BoxFuture, NoteStore, StorageError, StorageResult};
use crate::note::Note;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    notes: RwLock<Option<Vec<Note>>>,
    categories: RwLock<Option<Vec<String>>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for MemoryStorage {
    fn save_notes(&self, notes: &[Note]) -> BoxFuture<'_, StorageResult<()>> {
        let notes = notes.to_vec();
        Box::pin(async move {
            let mut slot = self
                .notes
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            *slot = Some(notes);
            Ok(())
        })
    }

    fn load_notes(&self) -> BoxFuture<'_, StorageResult<Vec<Note>>> {
        Box::pin(async move {
            let slot = self
                .notes
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            slot.clone()
                .ok_or_else(|| StorageError::NotFound("notes".to_string()))
        })
    }

    fn save_categories(&self, names: &[String]) -> BoxFuture<'_, StorageResult<()>> {
        let names = names.to_vec();
        Box::pin(async move {
            let mut slot = self
                .categories
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            *slot = Some(names);
            Ok(())
        })
    }

    fn load_categories(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let slot = self
                .categories
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            slot.clone()
                .ok_or_else(|| StorageError::NotFound("categories".to_string()))
        })
    }
}
