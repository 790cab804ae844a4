//! Audit logging for the expense ledger
//!
//! Every add, edit, delete, import and restore is recorded in an append-only
//! audit log with before/after values.
//!
//! - `AuditEntry`: one entry with timestamp, operation, entity and values.
//! - `AuditLogger`: writes entries as line-delimited JSON (JSONL).
//! - `generate_diff`: summary of the columns an edit changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(EntityType::Expense, "#4", Some(expense.label()), &expense);
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
