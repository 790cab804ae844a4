//! Expense display formatting
//!
//! Tables and detail views of expenses for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::StoredExpense;

/// One table row
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(stored: &StoredExpense, currency: &str) -> Self {
        Self {
            id: stored.id.number().to_string(),
            date: stored.expense.date.clone(),
            category: truncate(&stored.expense.category, 20),
            description: truncate(&stored.expense.description, 40),
            amount: stored.expense.amount.format_with_symbol(currency),
        }
    }
}

/// Format expenses as a table
///
/// The `#` column is the expense number used by `edit` and `delete`.
pub fn format_expense_table(expenses: &[StoredExpense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|stored| ExpenseRow::new(stored, currency))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::first(), Alignment::right())
        .modify(Columns::last(), Alignment::right());

    format!("{}\n", table)
}

/// Format one expense for display
pub fn format_expense_details(stored: &StoredExpense, currency: &str) -> String {
    let expense = &stored.expense;
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", stored.id));
    output.push_str(&format!("Date:        {}\n", expense.date));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency)
    ));

    output
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
