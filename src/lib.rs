//! spendtrack - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the spendtrack
//! application: an expense record model, a JSON file store with backup and
//! restore, and aggregate spending reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expense records)
//! - `storage`: JSON file storage layer
//! - `backup`: Backup and restore of the store file
//! - `reports`: Pure aggregation over expense collections
//! - `display`: Terminal report formatting
//! - `export`: CSV export
//!
//! # Example
//!
//! ```rust,ignore
//! use spendtrack::config::{paths::TrackerPaths, settings::Settings};
//! use spendtrack::storage::ExpenseStore;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = ExpenseStore::new(paths.expenses_file());
//! let expenses = store.load()?;
//! ```

pub mod backup;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
