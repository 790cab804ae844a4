//! Expense Summary
//!
//! Overall total and per-category totals for a list of expenses.

use serde::Serialize;

use crate::models::{Amount, Expense};

/// Total for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category label, exactly as stored
    pub category: String,
    /// Sum of amounts in this category
    pub total: f64,
    /// Number of expenses in this category
    pub count: usize,
    /// Share of the overall total
    pub percentage: f64,
}

/// Summary of a list of expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSummary {
    /// Sum of all amounts
    pub total: f64,
    /// Per-category totals in order of first occurrence
    pub by_category: Vec<CategoryTotal>,
    /// Number of expenses summarized
    pub count: usize,
}

impl ExpenseSummary {
    /// Summarize a list of expenses
    pub fn generate(expenses: &[Expense]) -> Self {
        summarize(expenses)
    }

    /// Look up the total for a category
    pub fn category_total(&self, category: &str) -> Option<f64> {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    /// Overall total rounded for display
    pub fn total_amount(&self) -> Amount {
        Amount::from_value(self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Compute the total and per-category totals
///
/// Categories are matched exactly (case-sensitive) and listed in the order
/// they first appear.
pub fn summarize(expenses: &[Expense]) -> ExpenseSummary {
    let mut by_category: Vec<CategoryTotal> = Vec::new();
    let mut total = 0.0;

    for expense in expenses {
        let value = expense.amount.value();
        total += value;

        match by_category
            .iter_mut()
            .find(|c| c.category == expense.category)
        {
            Some(entry) => {
                entry.total += value;
                entry.count += 1;
            }
            None => by_category.push(CategoryTotal {
                category: expense.category.clone(),
                total: value,
                count: 1,
                percentage: 0.0,
            }),
        }
    }

    for entry in &mut by_category {
        entry.percentage = if total == 0.0 {
            0.0
        } else {
            entry.total / total * 100.0
        };
    }

    ExpenseSummary {
        total,
        by_category,
        count: expenses.len(),
    }
}
