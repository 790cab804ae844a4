//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and summaries for the CLI.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_details, format_expense_table, truncate};
pub use summary::{format_bar, format_percentage, format_summary};
