//! Reports module for the expense tracker
//!
//! Aggregates over the ledger. Reports never touch storage; callers pass the
//! expenses they want summarized.

pub mod summary;

pub use summary::{summarize, CategoryTotal, ExpenseSummary};
