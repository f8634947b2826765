//! Terminal output formatting

pub mod report;

pub use report::{format_category_report, format_expense_list, format_month_report};
