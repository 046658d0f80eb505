//! Throwaway snapshot locations for tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A save-file path inside a private temporary directory.
///
/// The directory (and anything written into it) is removed when this value
/// is dropped, so keep it alive for the duration of the test.
pub struct TempSaveFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TempSaveFile {
    /// Create a fresh directory and return a not-yet-existing file path in it.
    pub fn new(file_name: &str) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(file_name);
        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the save file with raw bytes (e.g. to simulate corruption).
    pub fn write_raw(&self, contents: &[u8]) -> std::io::Result<()> {
        std::fs::write(&self.path, contents)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
