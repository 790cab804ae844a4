//! Backup system for the expense ledger
//!
//! Provides rolling backups with a configurable retention count and restore
//! functionality.
//!
//! - `BackupManager`: copies the ledger and prunes old copies
//! - `RestoreManager`: validates and restores backups
//!
//! # Backup Format
//!
//! A backup is a byte-for-byte copy of `expenses.csv`, named
//! `expenses-YYYYMMDD-HHMMSS-mmm.csv` inside the `backups/` directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::backup::{BackupManager, RestoreManager};
//!
//! let manager = BackupManager::new(storage.paths(), settings.backup_retention.clone());
//! manager.create_backup_with_retention()?;
//!
//! let result = RestoreManager::new(&storage).restore_from_file(&backup_path)?;
//! println!("{}", result.summary());
//! ```

mod manager;
mod restore;

pub use manager::{BackupInfo, BackupManager};
pub use restore::{BackupContents, RestoreManager, RestoreResult, ValidationResult};
