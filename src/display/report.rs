//! Report formatting for terminal output
//!
//! Renders the expense list and the aggregation results as plain text.

use crate::models::{Expense, Money};
use crate::reports;

/// Format the full expense list with a numbered row per record and a total line
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Expenses:\n");

    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {} | {:<16} | {:>12} | {}\n",
            i + 1,
            expense.date,
            expense.category,
            expense.amount.to_string(),
            expense.description
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total spent: {}\n", reports::total(expenses)));
    output
}

/// Format the spending-by-category report
///
/// Rows appear in first-occurrence order of each category; only the monthly
/// report sorts its keys.
pub fn format_category_report(expenses: &[Expense]) -> String {
    let totals = reports::by_category(expenses);
    format_breakdown("Spending by Category", &totals)
}

/// Format the spending-by-month report, months ascending
pub fn format_month_report(expenses: &[Expense]) -> String {
    let totals = reports::by_month(expenses);
    format_breakdown("Spending by Month", &totals)
}

fn format_breakdown(title: &str, totals: &[(String, Money)]) -> String {
    let mut output = String::new();
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(34));
    output.push('\n');

    if totals.is_empty() {
        output.push_str("(no expenses)\n");
        return output;
    }

    for (key, amount) in totals {
        output.push_str(&format!("{:<20} {:>12}\n", key, amount.to_string()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str, date: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            "note",
            Some(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()),
        )
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[]), "No expenses recorded.\n");
    }

    #[test]
    fn test_list_shows_total() {
        let expenses = vec![
            expense(1000, "Food", "2024-03-01"),
            expense(2000, "Rent", "2024-03-02"),
        ];

        let output = format_expense_list(&expenses);
        assert!(output.contains("Food"));
        assert!(output.contains("Total spent: $30.00"));
    }

    #[test]
    fn test_category_report() {
        let expenses = vec![
            expense(4250, "Food", "2024-03-15"),
            expense(750, "Food", "2024-03-17"),
        ];

        let output = format_category_report(&expenses);
        assert!(output.contains("Spending by Category"));
        assert!(output.contains("Food"));
        assert!(output.contains("$50.00"));
    }

    #[test]
    fn test_month_report_sorted() {
        let expenses = vec![
            expense(2000, "Food", "2024-04-01"),
            expense(1000, "Food", "2024-03-01"),
        ];

        let output = format_month_report(&expenses);
        let march = output.find("2024-03").unwrap();
        let april = output.find("2024-04").unwrap();
        assert!(march < april);
    }

    #[test]
    fn test_empty_report() {
        let output = format_month_report(&[]);
        assert!(output.contains("(no expenses)"));
    }
}
