use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_audit_command, handle_backup_command, handle_expense_command, handle_export_command,
    handle_import_command, handle_summary_command, BackupCommands, ExpenseCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::export::ExportFormat;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Record, edit, search and summarize personal expenses kept in a \
                  plain CSV file, from the command line or an interactive terminal UI."
)]
struct Cli {
    /// Data directory (overrides EXPENSE_TRACKER_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show the total and per-category totals
    Summary {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write all expenses to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format (defaults to the file extension, then CSV)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Replace all expenses with the rows of a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::with_settings(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Summary { json }) => handle_summary_command(&storage, &settings, json)?,
        Some(Commands::Export { output, format }) => {
            handle_export_command(&storage, &output, format)?
        }
        Some(Commands::Import { file }) => handle_import_command(&storage, &settings, &file)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&storage, &settings, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Ledger file:      {}", paths.expenses_file().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Audit enabled:        {}", settings.audit_enabled);
            println!("  Backup before import: {}", settings.backup_before_import);
            println!(
                "  Backups kept:         {}",
                settings.backup_retention.max_backups
            );
        }
        Some(Commands::Tui) => expense_tracker::tui::run_tui(&storage, &settings)?,
        None => {
            println!("Expense Tracker - personal expenses in a CSV file");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
