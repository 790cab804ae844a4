//! Expense repository for the CSV ledger
//!
//! Thin wrapper over the ledger file. Nothing is cached: every call goes to
//! disk, so the file stays the single source of truth.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;
use crate::models::Expense;

use super::file_io::{append_expense, read_expenses, write_expenses_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path to the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every expense, in file order
    ///
    /// A missing ledger is an empty list.
    pub fn load(&self) -> Result<Vec<Expense>, ExpenseError> {
        read_expenses(&self.path)
    }

    /// Replace the ledger with exactly these expenses
    pub fn save_all(&self, expenses: &[Expense]) -> Result<(), ExpenseError> {
        write_expenses_atomic(&self.path, expenses)
    }

    /// Append a single expense without rewriting the file
    pub fn append(&self, expense: &Expense) -> Result<(), ExpenseError> {
        append_expense(&self.path, expense)
    }

    /// Count expenses currently on disk
    pub fn count(&self) -> Result<usize, ExpenseError> {
        Ok(self.load()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn expense(date: &str, category: &str, description: &str, amount: &str) -> Expense {
        Expense::new(date, category, description, Amount::parse(amount).unwrap())
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_empty());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_then_load() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&expense("05-05-2025", "Travel", "Taxi", "23.40"))
            .unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded[0].to_fields(),
            ["05-05-2025", "Travel", "Taxi", "23.40"]
        );
    }

    #[test]
    fn test_save_all_is_idempotent() {
        let (_temp_dir, repo) = create_test_repo();

        repo.save_all(&[
            expense("01-01-2024", "Food", "x", "10.50"),
            expense("02-01-2024", "Food", "y", "5.25"),
            expense("02-01-2024", "Food", "y", "5.25"),
        ])
        .unwrap();

        let first = repo.load().unwrap();
        repo.save_all(&first).unwrap();
        let second = repo.load().unwrap();

        assert_eq!(first, second);
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn test_save_all_replaces() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&expense("01-01-2024", "Food", "x", "1")).unwrap();
        repo.save_all(&[]).unwrap();

        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_all_failure_is_surfaced() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail
        let path = temp_dir.path().join("expenses.csv");
        std::fs::create_dir_all(path.join("blocker")).unwrap();
        let repo = ExpenseRepository::new(path);

        let result = repo.save_all(&[expense("01-01-2024", "Food", "x", "1")]);
        assert!(result.is_err());
    }
}
