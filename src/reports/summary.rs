//! Spending aggregation
//!
//! Pure functions over an in-memory expense collection: a single linear pass
//! with a running-sum map. No side effects and no failure modes; any
//! well-formed collection (including empty) aggregates successfully.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Expense, Money};

/// Sum of all amounts; zero for an empty collection
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Summed amounts grouped by category
///
/// Categories match by exact string equality (case-sensitive, no
/// normalization). The result keeps first-occurrence order; unlike the
/// monthly report it is deliberately NOT sorted.
pub fn by_category(expenses: &[Expense]) -> Vec<(String, Money)> {
    let mut totals: Vec<(String, Money)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        match index.get(expense.category.as_str()) {
            Some(&i) => totals[i].1 += expense.amount,
            None => {
                index.insert(expense.category.as_str(), totals.len());
                totals.push((expense.category.clone(), expense.amount));
            }
        }
    }

    totals
}

/// Summed amounts grouped by month (YYYY-MM), in ascending key order
///
/// Lexicographic order on the key coincides with chronological order for
/// this date format.
pub fn by_month(expenses: &[Expense]) -> Vec<(String, Money)> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();

    for expense in expenses {
        *totals.entry(expense.month_key()).or_default() += expense.amount;
    }

    totals.into_iter().collect()
}
