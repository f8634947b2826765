//! Backup and restore for the expense store
//!
//! A backup is a byte-identical copy of the store file at a secondary path.
//! Restore copies it back, overwriting the current store.

use std::fs;
use std::path::PathBuf;

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};

/// Manages the backup copy of the store file
pub struct BackupManager {
    paths: TrackerPaths,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: TrackerPaths) -> Self {
        Self { paths }
    }

    /// Path where the backup copy lives
    pub fn backup_path(&self) -> PathBuf {
        self.paths.backup_file()
    }

    /// Check whether a backup exists
    pub fn has_backup(&self) -> bool {
        self.backup_path().exists()
    }

    /// Copy the store file to the backup path
    ///
    /// Returns the backup path. Fails with `NotFound` when no store file has
    /// been written yet.
    pub fn backup(&self) -> TrackerResult<PathBuf> {
        let store_file = self.paths.expenses_file();
        if !store_file.exists() {
            return Err(TrackerError::store_not_found(
                store_file.display().to_string(),
            ));
        }

        self.paths.ensure_directories()?;

        let backup_file = self.backup_path();
        fs::copy(&store_file, &backup_file)
            .map_err(|e| TrackerError::Io(format!("Failed to write backup: {}", e)))?;

        Ok(backup_file)
    }

    /// Copy the backup back over the store file
    ///
    /// Returns the restored store path. Fails with `NotFound` when no backup
    /// exists.
    pub fn restore(&self) -> TrackerResult<PathBuf> {
        let backup_file = self.backup_path();
        if !backup_file.exists() {
            return Err(TrackerError::backup_not_found(
                backup_file.display().to_string(),
            ));
        }

        self.paths.ensure_directories()?;

        let store_file = self.paths.expenses_file();
        fs::copy(&backup_file, &store_file)
            .map_err(|e| TrackerError::Io(format!("Failed to restore backup: {}", e)))?;

        Ok(store_file)
    }
}
