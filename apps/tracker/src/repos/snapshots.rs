//! Snapshot repository: the seam between the controller and the storage medium.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Snapshot;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("snapshot I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("snapshot could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("{0}")]
    Inconsistent(String),
}

impl PersistenceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Durable home for the single session snapshot.
///
/// Implementations are synchronous; each call completes or fails before
/// returning.
pub trait SnapshotStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError>;

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError>;

    /// Remove the snapshot. Clearing an absent snapshot succeeds.
    fn clear(&self) -> Result<(), PersistenceError>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &S {
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        (**self).load()
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        (**self).save(snapshot)
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        (**self).clear()
    }
}
