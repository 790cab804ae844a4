//! Export module for the expense tracker
//!
//! - CSV: the ledger encoding itself (re-importable)
//! - JSON: machine-readable snapshot
//! - YAML: human-readable snapshot

pub mod csv;
pub mod json;
pub mod yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

pub use self::csv::export_expenses_csv;
pub use json::{export_expenses_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_expenses_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Ledger CSV (can be imported back)
    #[default]
    Csv,
    /// JSON snapshot
    Json,
    /// YAML snapshot
    Yaml,
}

impl ExportFormat {
    /// Pick a format from a file extension, defaulting to CSV
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Csv,
        }
    }
}

/// Write expenses to a file in the given format
pub fn export_to_file(
    path: &Path,
    expenses: &[Expense],
    format: ExportFormat,
) -> ExpenseResult<()> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, &mut writer)?,
        ExportFormat::Json => export_expenses_json(expenses, &mut writer, true)?,
        ExportFormat::Yaml => export_expenses_yaml(expenses, &mut writer)?,
    }

    writer.flush().map_err(|e| {
        ExpenseError::Export(format!("Failed to write file {}: {}", path.display(), e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(&PathBuf::from("a.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("a.YML")), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("a.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("noext")), ExportFormat::Csv);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.csv");

        let err = export_to_file(&path, &[], ExportFormat::Csv).unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));
    }
}
