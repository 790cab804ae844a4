//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command line flag (handled by the binary)
//! 2. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 3. Platform data directory (`~/.local/share/expense-tracker` on Linux,
//!    `~/Library/Application Support/expense-tracker` on macOS,
//!    `%APPDATA%\expense-tracker\data` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Name of the ledger file inside the data directory
pub const EXPENSES_FILE_NAME: &str = "expenses.csv";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the backup directory
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the expense ledger
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join(EXPENSES_FILE_NAME)
    }

    /// Ensure the base and backup directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", "expense-tracker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Could not determine a data directory".into()))
}
