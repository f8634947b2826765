//! Core data models for spendtrack
//!
//! This module contains the data structures that represent the expense
//! tracking domain: monetary amounts and expense records.

pub mod expense;
pub mod money;

pub use expense::Expense;
pub use money::Money;
