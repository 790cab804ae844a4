//! Storage layer for the expense tracker
//!
//! Provides the CSV ledger with atomic rewrites and the audit log that
//! records every change made through it.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{decode_expenses, encode_expenses, read_expenses_required};

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    /// Create a new Storage instance honoring the user's settings
    pub fn with_settings(paths: ExpensePaths, settings: &Settings) -> Result<Self, ExpenseError> {
        let mut storage = Self::new(paths)?;
        storage.audit_enabled = settings.audit_enabled;
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Append an entry for a change that is already on disk
    fn log(&self, entry: AuditEntry) -> Result<(), ExpenseError> {
        if self.audit_enabled {
            self.audit.log(&entry).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Change was saved ({}), but the audit log could not be written: {}",
                    entry.operation, e
                ))
            })?;
        }
        Ok(())
    }

    /// Record an added expense
    pub fn log_create<T: Serialize>(
        &self,
        id: ExpenseId,
        name: Option<String>,
        entity: &T,
    ) -> Result<(), ExpenseError> {
        self.log(AuditEntry::create(
            EntityType::Expense,
            id.to_string(),
            name,
            entity,
        ))
    }

    /// Record an edited expense with a column diff
    pub fn log_update(
        &self,
        id: ExpenseId,
        before: &Expense,
        after: &Expense,
    ) -> Result<(), ExpenseError> {
        self.log(AuditEntry::update(
            EntityType::Expense,
            id.to_string(),
            Some(after.label()),
            before,
            after,
            generate_diff(before, after),
        ))
    }

    /// Record a deleted expense
    pub fn log_delete(&self, id: ExpenseId, entity: &Expense) -> Result<(), ExpenseError> {
        self.log(AuditEntry::delete(
            EntityType::Expense,
            id.to_string(),
            Some(entity.label()),
            entity,
        ))
    }

    /// Record a whole-ledger replacement (import or restore)
    pub fn log_replace(
        &self,
        operation: Operation,
        source: &str,
        previous_count: usize,
        new_count: usize,
    ) -> Result<(), ExpenseError> {
        self.log(AuditEntry::replace(
            operation,
            source,
            previous_count,
            new_count,
        ))
    }
}
