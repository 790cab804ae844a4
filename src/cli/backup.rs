//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;

use crate::backup::{BackupManager, RestoreManager};
use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Back up the current ledger
    Create,

    /// List all available backups
    List,

    /// Replace the ledger with a backup
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BackupCommands,
) -> ExpenseResult<()> {
    let manager = BackupManager::new(storage.paths(), settings.backup_retention.clone());

    match cmd {
        BackupCommands::Create => match manager.create_backup_with_retention()? {
            (Some(backup_path), deleted) => {
                println!("Backup created: {}", backup_path.display());
                if !deleted.is_empty() {
                    println!("Pruned {} old backup(s).", deleted.len());
                }
            }
            (None, _) => println!("Nothing to back up: no expenses recorded yet."),
        },

        BackupCommands::List => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: expenses backup create");
                return Ok(());
            }

            for (i, backup) in backups.iter().enumerate() {
                let age = chrono::Utc::now().signed_duration_since(backup.created_at);
                println!(
                    "  {}. {} ({} ago, {})",
                    i + 1,
                    backup.filename,
                    format_duration(age),
                    format_size(backup.size_bytes),
                );
            }

            println!();
            println!(
                "Total: {} backup(s), keeping at most {}",
                backups.len(),
                settings.backup_retention.max_backups
            );
        }

        BackupCommands::Restore { backup, force } => {
            let backup_path = manager.resolve(&backup)?;
            let restore_manager = RestoreManager::new(storage);
            let contents = restore_manager.load_backup(&backup_path)?;

            println!("File: {}", backup_path.display());
            println!("{}", contents.validation().summary());

            if !force {
                println!();
                println!("WARNING: This will replace the current ledger!");
                println!("To proceed, run again with --force flag:");
                println!("  expenses backup restore {} --force", backup);
                return Ok(());
            }

            if let (Some(pre_restore), _) = manager.create_backup_with_retention()? {
                println!("Current ledger saved to: {}", pre_restore.display());
            }

            // Retention may have pruned the chosen file; its rows are already in memory
            let result = restore_manager.restore(&contents)?;
            println!("{}", result.summary());
        }
    }

    Ok(())
}

/// Format a duration in human-readable form
fn format_duration(duration: chrono::Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    format!("{}d", hours / 24)
}

/// Format a file size in human-readable form
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(chrono::Duration::seconds(30)), "30s");
        assert_eq!(format_duration(chrono::Duration::minutes(5)), "5m");
        assert_eq!(format_duration(chrono::Duration::hours(3)), "3h");
        assert_eq!(format_duration(chrono::Duration::days(2)), "2d");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
