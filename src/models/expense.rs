//! Expense model
//!
//! Represents one logged transaction. Records are value objects: created once
//! (from user input or the store file) and never mutated afterwards.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::TrackerError;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent
    pub amount: Money,

    /// Short free-text label, e.g. "Food" or "Rent". Matched case-sensitively
    /// by the category report.
    pub category: String,

    /// Free-text note
    #[serde(default)]
    pub description: String,

    /// Calendar date of the expense (serialized as YYYY-MM-DD)
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense; the date defaults to today when not given
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date: date.unwrap_or_else(|| Local::now().date_naive()),
        }
    }

    /// Parse a date from user input (YYYY-MM-DD)
    pub fn parse_date(s: &str) -> Result<NaiveDate, TrackerError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| TrackerError::Format(format!("Invalid date: '{}' (expected YYYY-MM-DD)", s)))
    }

    /// The YYYY-MM grouping key used by the monthly report
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date, self.category, self.amount, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_explicit_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let expense = Expense::new(Money::from_cents(4250), "Food", "Groceries", Some(date));

        assert_eq!(expense.amount.cents(), 4250);
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.description, "Groceries");
        assert_eq!(expense.date, date);
    }

    #[test]
    fn test_new_defaults_to_today() {
        let expense = Expense::new(Money::from_cents(100), "Misc", "", None);
        assert_eq!(expense.date, Local::now().date_naive());
    }

    #[test]
    fn test_month_key() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let expense = Expense::new(Money::from_cents(4250), "Food", "Groceries", Some(date));
        assert_eq!(expense.month_key(), "2024-03");
    }

    #[test]
    fn test_parse_date() {
        let date = Expense::parse_date("2024-03-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

        assert!(Expense::parse_date("2024-13-01").unwrap_err().is_format());
        assert!(Expense::parse_date("15/03/2024").unwrap_err().is_format());
        assert!(Expense::parse_date("yesterday").unwrap_err().is_format());
    }

    #[test]
    fn test_serde_round_trip() {
        let expense = Expense::new(
            Money::from_cents(4250),
            "Food",
            "Groceries",
            Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
        );

        let json = serde_json::to_string(&expense).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, back);
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"amount": 42.50, "category": "Food", "description": "Groceries", "date": "2024-03-15"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.amount.cents(), 4250);
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.date.to_string(), "2024-03-15");
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let json = r#"{"amount": 1.0, "category": "Misc", "date": "2024-01-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.description, "");
    }
}
