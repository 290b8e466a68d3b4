//! Offline marker file
//!
//! A sentinel file whose presence means the last network attempt failed.
//! External tooling (the photo frame itself) watches this file to decide
//! whether to fall back to already-cached images.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::ValueEnum;

/// When the offline flag is removed again after a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OfflinePolicy {
    /// Remove the flag after the next successful download
    #[default]
    ClearOnSuccess,
    /// Never remove the flag; some external process owns cleanup
    Sticky,
}

/// Handle to the offline marker file
#[derive(Debug, Clone)]
pub struct OfflineFlag {
    path: PathBuf,
}

impl OfflineFlag {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns whether the flag is currently present
    pub fn is_set(&self) -> bool {
        self.path.exists()
    }

    /// Creates the flag file. Overwriting an existing flag is fine; the
    /// contents are irrelevant, only presence matters.
    pub fn mark(&self) -> io::Result<()> {
        fs::write(&self.path, b"")
    }

    /// Removes the flag file if present
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_flag() -> (OfflineFlag, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let flag = OfflineFlag::new(temp_dir.path().join("offline.flag"));
        (flag, temp_dir)
    }

    #[test]
    fn test_flag_starts_unset() {
        let (flag, _temp_dir) = create_test_flag();
        assert!(!flag.is_set());
    }

    #[test]
    fn test_mark_then_clear_roundtrip() {
        let (flag, _temp_dir) = create_test_flag();

        flag.mark().expect("Mark should succeed");
        assert!(flag.is_set());

        flag.clear().expect("Clear should succeed");
        assert!(!flag.is_set());
    }

    #[test]
    fn test_mark_is_idempotent() {
        let (flag, _temp_dir) = create_test_flag();

        flag.mark().expect("First mark should succeed");
        flag.mark().expect("Second mark should succeed");
        assert!(flag.is_set());
    }

    #[test]
    fn test_clear_on_missing_flag_is_not_an_error() {
        let (flag, _temp_dir) = create_test_flag();
        flag.clear().expect("Clearing an absent flag should succeed");
    }
}
