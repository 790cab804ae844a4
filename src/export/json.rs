//! JSON Export functionality
//!
//! Exports the ledger as a snapshot document with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of the whole ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of expenses in the snapshot
    pub expense_count: usize,

    /// Earliest expense date, as stored
    pub earliest_expense: Option<String>,

    /// Latest expense date, as stored
    pub latest_expense: Option<String>,

    /// All expenses in ledger order
    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    /// Build a snapshot of the given expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let earliest_expense = expenses
            .iter()
            .min_by_key(|e| e.naive_date())
            .map(|e| e.date.clone());

        let latest_expense = expenses
            .iter()
            .max_by_key(|e| e.naive_date())
            .map(|e| e.date.clone());

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            earliest_expense,
            latest_expense,
            expenses: expenses.to_vec(),
        }
    }
}

/// Export expenses to JSON
pub fn export_expenses_json<W: Write>(
    expenses: &[Expense],
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = ExpenseExport::from_expenses(expenses);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("15-03-2024", "Food", "Lunch", Amount::parse("10.50").unwrap()),
            Expense::new("02-01-2024", "Rent", "March", Amount::parse("900").unwrap()),
        ]
    }

    #[test]
    fn test_json_export() {
        let mut output = Vec::new();
        export_expenses_json(&sample(), &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["expense_count"], 2);
        assert_eq!(value["expenses"][0]["category"], "Food");
        assert_eq!(value["expenses"][0]["amount"], "10.50");
    }

    #[test]
    fn test_date_range_uses_calendar_order() {
        let export = ExpenseExport::from_expenses(&sample());
        assert_eq!(export.earliest_expense.as_deref(), Some("02-01-2024"));
        assert_eq!(export.latest_expense.as_deref(), Some("15-03-2024"));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut output = Vec::new();
        export_expenses_json(&sample(), &mut output, false).unwrap();

        let parsed: ExpenseExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.expenses, sample());
    }

    #[test]
    fn test_empty_export() {
        let export = ExpenseExport::from_expenses(&[]);
        assert_eq!(export.expense_count, 0);
        assert!(export.earliest_expense.is_none());
    }
}
