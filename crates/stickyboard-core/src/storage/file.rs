//! File-based storage implementation for native platforms.

use super::{BoxFuture, NoteStore, StorageError, StorageResult};
use crate::note::Note;
use std::fs;
use std::path::{Path, PathBuf};

const NOTES_FILE: &str = "notes.json";
const CATEGORIES_FILE: &str = "categories.json";

/// File-based storage for native platforms.
///
/// Stores the board as two JSON files in a base directory.
pub struct FileStorage {
    /// Base directory for board storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/stickyboard/`
    /// On Windows: `%LOCALAPPDATA%\stickyboard\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("stickyboard"))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> StorageResult<T> {
        if !path.exists() {
            return Err(StorageError::NotFound(path.display().to_string()));
        }
        let json = fs::read_to_string(path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

impl NoteStore for FileStorage {
    fn save_notes(&self, notes: &[Note]) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.base_path.join(NOTES_FILE);
        let notes = notes.to_vec();
        Box::pin(async move { Self::write_json(&path, &notes) })
    }

    fn load_notes(&self) -> BoxFuture<'_, StorageResult<Vec<Note>>> {
        let path = self.base_path.join(NOTES_FILE);
        Box::pin(async move { Self::read_json(&path) })
    }

    fn save_categories(&self, names: &[String]) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.base_path.join(CATEGORIES_FILE);
        let names = names.to_vec();
        Box::pin(async move { Self::write_json(&path, &names) })
    }

    fn load_categories(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        let path = self.base_path.join(CATEGORIES_FILE);
        Box::pin(async move { Self::read_json(&path) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::block_on;
    use kurbo::{Point, Size};
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_save_load_notes() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let mut note = Note::new(Point::new(10.0, 50.0), Size::new(150.0, 150.0), "Work");
        note.content = "groceries".to_string();

        block_on(storage.save_notes(std::slice::from_ref(&note))).unwrap();
        let loaded = block_on(storage.load_notes()).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id(), note.id());
        assert_eq!(loaded[0].content, "groceries");
        assert_eq!(loaded[0].position, note.position);
    }

    #[test]
    fn test_file_storage_notes_not_found() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let result = block_on(storage.load_notes());
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_file_storage_save_load_categories() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let names = vec!["All".to_string(), "Work".to_string()];
        block_on(storage.save_categories(&names)).unwrap();
        assert_eq!(block_on(storage.load_categories()).unwrap(), names);
    }

    #[test]
    fn test_file_storage_corrupt_notes_file() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        fs::write(dir.path().join(NOTES_FILE), "not json").unwrap();
        let result = block_on(storage.load_notes());
        assert!(matches!(result, Err(StorageError::Serialization(_))));

        // The fail-soft loader turns that into an empty board
        let notes = block_on(crate::storage::load_notes_or_empty(&storage));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_file_storage_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(nested.clone()).unwrap();
        assert!(nested.exists());
        assert_eq!(storage.base_path(), &nested);
    }
}
