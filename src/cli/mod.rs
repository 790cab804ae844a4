//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod backup;
pub mod expense;
pub mod export;
pub mod import;
pub mod report;

pub use audit::handle_audit_command;
pub use backup::{handle_backup_command, BackupCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::handle_export_command;
pub use import::handle_import_command;
pub use report::handle_summary_command;
