//! Core data models for the expense tracker
//!
//! The ledger has a single entity, the expense. Amounts and session
//! identifiers get their own types.

pub mod amount;
pub mod expense;
pub mod ids;

pub use amount::{Amount, AmountParseError};
pub use expense::{parse_date, Expense, StoredExpense, DATE_FORMAT};
pub use ids::{ExpenseId, ParseExpenseIdError};
