//! Expense service
//!
//! Add, edit, delete, search, import and export over the ledger. Every call
//! reloads the ledger from disk; nothing is cached between calls.

use std::path::{Path, PathBuf};

use crate::audit::Operation;
use crate::backup::BackupManager;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_to_file, ExportFormat};
use crate::models::{Expense, ExpenseId, StoredExpense};
use crate::reports::ExpenseSummary;
use crate::storage::{read_expenses_required, Storage};
use crate::validation::ExpenseInput;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new expense
    pub fn add(&self, input: &ExpenseInput) -> ExpenseResult<StoredExpense> {
        let expense = input.validate()?;

        let id = ExpenseId::from_index(self.storage.expenses.count()?);
        self.storage.expenses.append(&expense)?;

        self.storage
            .log_create(id, Some(expense.label()), &expense)?;

        Ok(StoredExpense { id, expense })
    }

    /// All expenses in ledger order
    pub fn list(&self) -> ExpenseResult<Vec<StoredExpense>> {
        Ok(StoredExpense::index_all(self.storage.expenses.load()?))
    }

    /// Get a single expense
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<StoredExpense> {
        let expense = self
            .storage
            .expenses
            .load()?
            .into_iter()
            .nth(id.index())
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        Ok(StoredExpense { id, expense })
    }

    /// Replace the selected expense with validated input
    pub fn update(
        &self,
        selection: Option<ExpenseId>,
        input: &ExpenseInput,
    ) -> ExpenseResult<StoredExpense> {
        let id = selection.ok_or(ExpenseError::NoSelection)?;
        let expense = input.validate()?;

        let mut expenses = self.storage.expenses.load()?;
        let slot = expenses
            .get_mut(id.index())
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        let before = std::mem::replace(slot, expense.clone());

        self.storage.expenses.save_all(&expenses)?;
        self.storage.log_update(id, &before, &expense)?;

        Ok(StoredExpense { id, expense })
    }

    /// Remove the selected expense
    ///
    /// Ids of the rows after it shift down by one; callers must reload.
    pub fn delete(&self, selection: Option<ExpenseId>) -> ExpenseResult<Expense> {
        let id = selection.ok_or(ExpenseError::NoSelection)?;

        let mut expenses = self.storage.expenses.load()?;
        if id.index() >= expenses.len() {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }
        let removed = expenses.remove(id.index());

        self.storage.expenses.save_all(&expenses)?;
        self.storage.log_delete(id, &removed)?;

        Ok(removed)
    }

    /// Case-insensitive search over date, category and description
    ///
    /// Results keep the ids they have in the full list.
    pub fn search(&self, query: &str) -> ExpenseResult<Vec<StoredExpense>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|stored| stored.expense.matches_query(query))
            .collect())
    }

    /// Total and per-category totals of the whole ledger
    pub fn summary(&self) -> ExpenseResult<ExpenseSummary> {
        Ok(ExpenseSummary::generate(&self.storage.expenses.load()?))
    }

    /// Write the whole ledger to a file, returning the number of rows written
    pub fn export_to(&self, path: &Path, format: ExportFormat) -> ExpenseResult<usize> {
        let expenses = self.storage.expenses.load()?;
        export_to_file(path, &expenses, format)?;
        Ok(expenses.len())
    }

    /// Replace the ledger with the rows of a CSV file
    ///
    /// The file is fully decoded before anything is written. When a backup
    /// manager is given, the current ledger is copied first.
    pub fn import_from(
        &self,
        path: &Path,
        backups: Option<&BackupManager>,
    ) -> ExpenseResult<ImportResult> {
        let imported = read_expenses_required(path)?;
        let previous_count = self.storage.expenses.count()?;

        let backup = match backups {
            Some(manager) => manager.create_backup_with_retention()?.0,
            None => None,
        };

        self.storage.expenses.save_all(&imported)?;
        self.storage.log_replace(
            Operation::Import,
            &path.display().to_string(),
            previous_count,
            imported.len(),
        )?;

        Ok(ImportResult {
            imported: imported.len(),
            replaced: previous_count,
            backup,
        })
    }
}

/// Outcome of an import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    /// Rows now in the ledger
    pub imported: usize,
    /// Rows the ledger held before
    pub replaced: usize,
    /// Backup of the previous ledger, if one was taken
    pub backup: Option<PathBuf>,
}
