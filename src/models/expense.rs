//! Expense model
//!
//! One row of the ledger: date, category, description and amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::ExpenseId;

/// The only accepted date format, e.g. "05-05-2025"
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a ledger date, rejecting anything that is not a real dd-mm-yyyy date
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !has_date_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Day and month of one or two digits, a four digit year, nothing else
///
/// chrono alone accepts signed years of any width and padding whitespace.
fn has_date_shape(s: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let parts: Vec<&str> = s.split('-').collect();
    match parts.as_slice() {
        [day, month, year] => digits(day, 1, 2) && digits(month, 1, 2) && digits(year, 4, 4),
        _ => false,
    }
}

/// A single expense
///
/// Field order matches the column order of the ledger file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Date as entered, always valid under [`DATE_FORMAT`]
    pub date: String,

    /// Free-text category label
    pub category: String,

    /// Free-text note
    pub description: String,

    /// Amount spent
    pub amount: Amount,
}

impl Expense {
    /// Create a new expense from already validated parts
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    /// The date as a calendar date
    pub fn naive_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// The four ledger columns in file order
    pub fn to_fields(&self) -> [&str; 4] {
        [
            &self.date,
            &self.category,
            &self.description,
            self.amount.as_str(),
        ]
    }

    /// Case-insensitive substring match on date, category or description
    ///
    /// The amount is never searched. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.date.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    /// Short one-line label used in audit entries and notifications
    pub fn label(&self) -> String {
        format!("{} {} {}", self.date, self.category, self.amount)
    }
}

/// An expense paired with its identifier in the loaded list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredExpense {
    pub id: ExpenseId,
    pub expense: Expense,
}

impl StoredExpense {
    /// Tag every expense with its position in the full list
    pub fn index_all(expenses: Vec<Expense>) -> Vec<StoredExpense> {
        expenses
            .into_iter()
            .enumerate()
            .map(|(i, expense)| StoredExpense {
                id: ExpenseId::from_index(i),
                expense,
            })
            .collect()
    }
}
