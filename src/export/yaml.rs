//! YAML Export functionality
//!
//! Exports the ledger snapshot in YAML for human-readable archives.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::Expense;

/// Export expenses to YAML
pub fn export_expenses_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_expenses(expenses);
    let to_export_err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Export").map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
