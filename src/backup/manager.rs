//! Backup manager for the expense ledger
//!
//! Copies the ledger into the backup directory as timestamped CSV files and
//! prunes old copies according to the retention policy.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::Serialize;

use crate::config::paths::ExpensePaths;
use crate::config::settings::BackupRetention;
use crate::error::{ExpenseError, ExpenseResult};

const BACKUP_PREFIX: &str = "expenses-";
const BACKUP_SUFFIX: &str = ".csv";

/// Metadata about a backup
#[derive(Debug, Clone, Serialize)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    ledger_path: PathBuf,
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: &ExpensePaths, retention: BackupRetention) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            ledger_path: paths.expenses_file(),
            retention,
        }
    }

    /// Copy the current ledger into the backup directory
    ///
    /// Returns `None` when there is no ledger yet.
    pub fn create_backup(&self) -> ExpenseResult<Option<PathBuf>> {
        if !self.ledger_path.exists() {
            return Ok(None);
        }

        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            ExpenseError::Backup(format!("Failed to create backup directory: {}", e))
        })?;

        let now = Utc::now();
        let filename = format!(
            "{}{}-{:03}{}",
            BACKUP_PREFIX,
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis(),
            BACKUP_SUFFIX
        );
        let backup_path = self.backup_dir.join(filename);

        fs::copy(&self.ledger_path, &backup_path)
            .map_err(|e| ExpenseError::Backup(format!("Failed to write backup file: {}", e)))?;

        Ok(Some(backup_path))
    }

    /// Create a backup and then enforce the retention policy
    pub fn create_backup_with_retention(&self) -> ExpenseResult<(Option<PathBuf>, Vec<PathBuf>)> {
        let backup_path = self.create_backup()?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> ExpenseResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| ExpenseError::Io(format!("Failed to read directory entry: {}", e)))?;

            if let Some(info) = parse_backup_info(&entry.path()) {
                backups.push(info);
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Delete backups beyond the configured count, oldest first
    pub fn enforce_retention(&self) -> ExpenseResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for backup in self
            .list_backups()?
            .into_iter()
            .skip(self.retention.max_backups)
        {
            fs::remove_file(&backup.path)
                .map_err(|e| ExpenseError::Io(format!("Failed to delete old backup: {}", e)))?;
            deleted.push(backup.path);
        }

        Ok(deleted)
    }

    /// Get the backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// Resolve a backup by filename, path, or `latest`
    pub fn resolve(&self, name: &str) -> ExpenseResult<PathBuf> {
        if name.eq_ignore_ascii_case("latest") {
            return self
                .get_latest_backup()?
                .map(|b| b.path)
                .ok_or_else(|| ExpenseError::NotFound {
                    entity_type: "Backup",
                    identifier: "latest".to_string(),
                });
        }

        let direct = PathBuf::from(name);
        if direct.is_file() {
            return Ok(direct);
        }

        let in_dir = self.backup_dir.join(name);
        if in_dir.is_file() {
            return Ok(in_dir);
        }

        Err(ExpenseError::NotFound {
            entity_type: "Backup",
            identifier: name.to_string(),
        })
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> ExpenseResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let stamp = filename
        .strip_prefix(BACKUP_PREFIX)?
        .strip_suffix(BACKUP_SUFFIX)?;
    let created_at = parse_backup_timestamp(stamp)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}

/// Parse `YYYYMMDD-HHMMSS-mmm` from a backup filename
fn parse_backup_timestamp(stamp: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = stamp.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let (date_part, time_part) = (parts[0], parts[1]);
    if date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let millis: u32 = parts[2].parse().ok()?;
    let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").ok()?;
    let time = NaiveTime::parse_from_str(time_part, "%H%M%S").ok()?;
    let time = NaiveTime::from_hms_milli_opt(time.hour(), time.minute(), time.second(), millis)?;

    Some(DateTime::from_naive_utc_and_offset(
        NaiveDateTime::new(date, time),
        Utc,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use tempfile::TempDir;

    fn create_test_manager(max_backups: usize) -> (BackupManager, ExpensePaths, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let manager = BackupManager::new(&paths, BackupRetention { max_backups });
        (manager, paths, temp_dir)
    }

    fn write_ledger(paths: &ExpensePaths) {
        fs::write(paths.expenses_file(), "01-01-2024,Food,x,1\n").unwrap();
    }

    #[test]
    fn test_no_ledger_no_backup() {
        let (manager, _paths, _temp) = create_test_manager(3);
        assert!(manager.create_backup().unwrap().is_none());
        assert!(manager.list_backups().unwrap().is_empty());
    }

    #[test]
    fn test_create_backup_copies_ledger() {
        let (manager, paths, _temp) = create_test_manager(3);
        write_ledger(&paths);

        let backup_path = manager.create_backup().unwrap().unwrap();
        assert!(backup_path.exists());
        assert_eq!(
            fs::read_to_string(&backup_path).unwrap(),
            "01-01-2024,Food,x,1\n"
        );
    }

    #[test]
    fn test_list_backups_newest_first() {
        let (manager, paths, _temp) = create_test_manager(3);
        write_ledger(&paths);

        manager.create_backup().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        manager.create_backup().unwrap();

        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert!(backups[0].created_at >= backups[1].created_at);
    }

    #[test]
    fn test_retention_policy() {
        let (manager, paths, _temp) = create_test_manager(3);
        write_ledger(&paths);

        for _ in 0..5 {
            manager.create_backup().unwrap();
            std::thread::sleep(std::time::Duration::from_millis(20));
        }

        let deleted = manager.enforce_retention().unwrap();
        assert_eq!(deleted.len(), 2);
        assert_eq!(manager.list_backups().unwrap().len(), 3);
    }

    #[test]
    fn test_unrelated_files_ignored() {
        let (manager, _paths, _temp) = create_test_manager(3);
        fs::write(manager.backup_dir().join("notes.txt"), "hi").unwrap();

        assert!(manager.list_backups().unwrap().is_empty());
    }

    #[test]
    fn test_resolve() {
        let (manager, paths, _temp) = create_test_manager(3);
        write_ledger(&paths);
        let backup_path = manager.create_backup().unwrap().unwrap();
        let filename = backup_path.file_name().unwrap().to_string_lossy().to_string();

        assert_eq!(manager.resolve(&filename).unwrap(), backup_path);
        assert_eq!(manager.resolve("latest").unwrap(), backup_path);
        assert!(manager.resolve("missing.csv").unwrap_err().is_not_found());
    }

    #[test]
    fn test_resolve_latest_without_backups() {
        let (manager, _paths, _temp) = create_test_manager(3);
        assert!(manager.resolve("latest").unwrap_err().is_not_found());
    }

    #[test]
    fn test_parse_backup_timestamp() {
        let timestamp = parse_backup_timestamp("20251127-143022-456").unwrap();
        assert_eq!(timestamp.year(), 2025);
        assert_eq!(timestamp.month(), 11);
        assert_eq!(timestamp.day(), 27);
        assert_eq!(timestamp.hour(), 14);
        assert_eq!(timestamp.nanosecond(), 456_000_000);

        assert!(parse_backup_timestamp("20251127-143022").is_none());
        assert!(parse_backup_timestamp("garbage").is_none());
    }
}
