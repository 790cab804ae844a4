//! Expense Tracker - personal expense ledger for the terminal
//!
//! This library provides the core functionality for recording, editing,
//! searching and summarizing personal expenses kept in a plain CSV file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense, amount and identifier types
//! - `validation`: Form input validation
//! - `storage`: CSV ledger with atomic rewrites
//! - `services`: Add, edit, delete, search, import and export
//! - `reports`: Totals and per-category summaries
//! - `export`: CSV, JSON and YAML writers
//! - `audit`: Audit logging system
//! - `backup`: Ledger backups and restore
//! - `cli` / `display`: Command handlers and terminal formatting
//! - `tui`: Interactive form and table
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::paths::ExpensePaths;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//! use expense_tracker::validation::ExpenseInput;
//!
//! let storage = Storage::new(ExpensePaths::new()?)?;
//! let service = ExpenseService::new(&storage);
//! service.add(&ExpenseInput::new("05-05-2025", "Travel", "Taxi", "23.40"))?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;
pub mod validation;

pub use error::{ExpenseError, ExpenseResult};
