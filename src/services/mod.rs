//! Service layer for the expense tracker
//!
//! The service layer provides the expense operations on top of the storage
//! layer: validation, ledger rewrites and audit logging.

pub mod expense;

pub use expense::{ExpenseService, ImportResult};
