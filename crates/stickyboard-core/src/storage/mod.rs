//! Storage abstraction for board persistence.

mod commit;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use commit::CommitSaver;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::note::Note;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for board storage backends.
///
/// Notes and the category list are persisted independently so that a
/// corrupt or missing file loses only its own half of the data.
pub trait NoteStore: Send + Sync {
    /// Persist the full note collection, replacing what was there.
    fn save_notes(&self, notes: &[Note]) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the note collection.
    fn load_notes(&self) -> BoxFuture<'_, StorageResult<Vec<Note>>>;

    /// Persist the category names, replacing what was there.
    fn save_categories(&self, names: &[String]) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the category names.
    fn load_categories(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;
}

/// Load notes, treating any failure as an empty board.
///
/// First launch has no data file and a corrupt file should not take the
/// whole board down with it, so decode failures are logged and dropped.
pub async fn load_notes_or_empty(store: &dyn NoteStore) -> Vec<Note> {
    match store.load_notes().await {
        Ok(notes) => notes,
        Err(StorageError::NotFound(_)) => Vec::new(),
        Err(e) => {
            log::warn!("failed to load notes, starting empty: {e}");
            Vec::new()
        }
    }
}

/// Load categories, treating any failure as the default list.
pub async fn load_categories_or_default(store: &dyn NoteStore) -> crate::category::CategoryList {
    match store.load_categories().await {
        Ok(names) => crate::category::CategoryList::from_names(names),
        Err(StorageError::NotFound(_)) => crate::category::CategoryList::default(),
        Err(e) => {
            log::warn!("failed to load categories, using defaults: {e}");
            crate::category::CategoryList::default()
        }
    }
}

#[cfg(test)]
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    // Simple blocking executor for tests
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {}
        }
    }
}
