//! Expense store for JSON persistence
//!
//! The store owns the authoritative on-disk copy of the expense collection:
//! a single JSON array of record objects, insertion order preserved. Every
//! in-memory `Vec<Expense>` is an explicit snapshot obtained from `load`,
//! never ambient state.

use std::path::{Path, PathBuf};

use crate::error::TrackerError;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Durable storage for the full expense collection
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store over the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the underlying store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all expenses from disk
    ///
    /// A missing file is the expected first-run state and yields an empty
    /// collection. An existing but unparseable file is a `CorruptData` error,
    /// surfaced rather than silently discarding data.
    pub fn load(&self) -> Result<Vec<Expense>, TrackerError> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    /// Save the full collection, atomically overwriting the store file
    pub fn save(&self, expenses: &[Expense]) -> Result<(), TrackerError> {
        write_json_atomic(&self.path, &expenses)
    }

    /// Append one expense and rewrite the file
    ///
    /// The whole file is rewritten on every addition. Fine at personal-use
    /// record counts; not meant for large datasets or concurrent writers.
    pub fn append(&self, expense: Expense) -> Result<Vec<Expense>, TrackerError> {
        let mut expenses = self.load()?;
        expenses.push(expense);
        self.save(&expenses)?;
        Ok(expenses)
    }
}
