//! Backup restoration for the expense ledger
//!
//! A backup is decoded with the same rules as the live ledger, so a damaged
//! backup is rejected before anything is overwritten.

use std::path::Path;

use crate::audit::Operation;
use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::storage::{read_expenses_required, Storage};

/// Handles restoring from backups
pub struct RestoreManager<'a> {
    storage: &'a Storage,
}

impl<'a> RestoreManager<'a> {
    /// Create a new RestoreManager
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Decode a backup file into memory
    ///
    /// The returned contents no longer depend on the file, so it may be
    /// pruned before [`RestoreManager::restore`] runs.
    pub fn load_backup(&self, backup_path: &Path) -> ExpenseResult<BackupContents> {
        Ok(BackupContents {
            source: backup_path.display().to_string(),
            expenses: read_expenses_required(backup_path)?,
        })
    }

    /// Replace the ledger with previously loaded backup contents
    ///
    /// Callers should take a fresh backup of the current ledger first.
    pub fn restore(&self, contents: &BackupContents) -> ExpenseResult<RestoreResult> {
        let previous_count = self.storage.expenses.count()?;

        self.storage.expenses.save_all(&contents.expenses)?;
        self.storage.log_replace(
            Operation::Restore,
            &contents.source,
            previous_count,
            contents.expenses.len(),
        )?;

        Ok(RestoreResult {
            previous_count,
            restored_count: contents.expenses.len(),
        })
    }

    /// Replace the ledger with the contents of a backup file
    pub fn restore_from_file(&self, backup_path: &Path) -> ExpenseResult<RestoreResult> {
        let contents = self.load_backup(backup_path)?;
        self.restore(&contents)
    }

    /// Validate a backup file without restoring it
    pub fn validate_backup(&self, backup_path: &Path) -> ExpenseResult<ValidationResult> {
        Ok(self.load_backup(backup_path)?.validation())
    }
}

/// A decoded backup, ready to restore
#[derive(Debug, Clone)]
pub struct BackupContents {
    /// Where the rows were read from, for the audit log
    pub source: String,
    pub expenses: Vec<Expense>,
}

impl BackupContents {
    pub fn validation(&self) -> ValidationResult {
        ValidationResult::from_expenses(&self.expenses)
    }
}

/// Result of a restore operation
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RestoreResult {
    /// Rows in the ledger before the restore
    pub previous_count: usize,
    /// Rows written from the backup
    pub restored_count: usize,
}

impl RestoreResult {
    pub fn summary(&self) -> String {
        format!(
            "Restored {} expense(s), replacing {}",
            self.restored_count, self.previous_count
        )
    }
}

/// Result of validating a backup
#[derive(Debug)]
pub struct ValidationResult {
    /// Number of rows in the backup
    pub expense_count: usize,
    /// Earliest and latest dates recorded, as stored
    pub date_range: Option<(String, String)>,
}

impl ValidationResult {
    fn from_expenses(expenses: &[Expense]) -> Self {
        let mut dated: Vec<&Expense> = expenses.iter().collect();
        dated.sort_by_key(|e| e.naive_date());

        let date_range = match (dated.first(), dated.last()) {
            (Some(first), Some(last)) => Some((first.date.clone(), last.date.clone())),
            _ => None,
        };

        Self {
            expense_count: expenses.len(),
            date_range,
        }
    }

    pub fn summary(&self) -> String {
        match &self.date_range {
            Some((first, last)) => format!(
                "Valid backup: {} expense(s) from {} to {}",
                self.expense_count, first, last
            ),
            None => "Valid backup: no expenses".to_string(),
        }
    }
}
