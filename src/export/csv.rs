//! CSV Export functionality
//!
//! Writes expenses in exactly the ledger encoding, so an exported file can be
//! imported back unchanged.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::encode_expenses;

/// Export expenses as ledger-compatible CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    encode_expenses(writer, expenses).map_err(|e| ExpenseError::Export(e.to_string()))
}
