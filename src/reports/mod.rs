//! Aggregate spending reports

pub mod summary;

pub use summary::{by_category, by_month, total};
