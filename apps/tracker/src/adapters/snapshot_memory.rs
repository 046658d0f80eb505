//! In-memory snapshot store.
//!
//! Keeps the encoded JSON text rather than the struct so that loads exercise
//! the same decode path as the file store. Single-threaded by construction.

use std::cell::{Cell, RefCell};
use std::io;

use crate::domain::Snapshot;
use crate::repos::snapshots::{PersistenceError, SnapshotStore};

const MEMORY_PATH: &str = "<memory>";

#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw text, e.g. a corrupt snapshot.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::default();
        store.slot.replace(Some(raw.into()));
        store
    }

    /// Make subsequent saves and clears fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        if self.fail_writes.get() {
            return Err(PersistenceError::io(
                MEMORY_PATH,
                io::Error::other("writes disabled"),
            ));
        }
        Ok(())
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        match self.slot.borrow().as_deref() {
            None => Ok(None),
            Some(text) => serde_json::from_str(text)
                .map(Some)
                .map_err(PersistenceError::Decode),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        self.check_writable()?;
        let text = serde_json::to_string(snapshot).map_err(PersistenceError::Encode)?;
        self.slot.replace(Some(text));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        self.check_writable()?;
        self.slot.replace(None);
        Ok(())
    }
}
