//! CSV export functionality
//!
//! Exports the expense list to CSV format for spreadsheet use.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> TrackerResult<()> {
    writeln!(writer, "Date,Category,Amount,Description")
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{:.2},{}",
            expense.date,
            escape_csv(&expense.category),
            expense.amount.to_unit(),
            escape_csv(&expense.description)
        )
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
