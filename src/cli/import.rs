//! CLI command handler for CSV import
//!
//! Import replaces the whole ledger with the rows of the given file.

use std::path::Path;

use crate::backup::BackupManager;
use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    file: &Path,
) -> ExpenseResult<()> {
    if !file.exists() {
        return Err(ExpenseError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let manager = BackupManager::new(storage.paths(), settings.backup_retention.clone());
    let backups = settings.backup_before_import.then_some(&manager);

    let result = ExpenseService::new(storage).import_from(file, backups)?;

    if let Some(backup) = &result.backup {
        println!("Previous ledger saved to: {}", backup.display());
    }
    println!(
        "Imported {} expense(s), replacing {}.",
        result.imported, result.replaced
    );

    Ok(())
}
