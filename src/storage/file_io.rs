//! CSV file I/O with atomic writes
//!
//! Ledger files are plain CSV: one expense per row, four columns
//! (`date,category,description,amount`), standard quoting, no header row.
//! Every row is validated on the way in, so a decoded list always satisfies
//! the expense invariants.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::ExpenseError;
use crate::models::Expense;
use crate::validation::validate;

/// Number of columns in every ledger row
pub const FIELD_COUNT: usize = 4;

/// Decode ledger rows from any reader
///
/// `source` names the input in error messages. Blank lines are skipped; any
/// malformed row fails the whole decode.
pub fn decode_expenses<R: Read>(reader: R, source: &str) -> Result<Vec<Expense>, ExpenseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut expenses = Vec::new();

    for result in csv_reader.records() {
        let record = result
            .map_err(|e| ExpenseError::Storage(format!("Failed to parse {}: {}", source, e)))?;

        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != FIELD_COUNT {
            return Err(ExpenseError::Storage(format!(
                "{} line {}: expected {} fields, got {}",
                source,
                line,
                FIELD_COUNT,
                record.len()
            )));
        }

        let expense = validate(&record[0], &record[1], &record[2], &record[3])
            .map_err(|e| ExpenseError::Storage(format!("{} line {}: {}", source, line, e)))?;

        expenses.push(expense);
    }

    Ok(expenses)
}

/// Encode ledger rows to any writer
pub fn encode_expenses<W: Write>(writer: W, expenses: &[Expense]) -> Result<(), ExpenseError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for expense in expenses {
        csv_writer.write_record(expense.to_fields())?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Read a ledger file, returning an empty list if the file doesn't exist
pub fn read_expenses<P: AsRef<Path>>(path: P) -> Result<Vec<Expense>, ExpenseError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    read_expenses_required(path)
}

/// Read a ledger file, returning an error if the file doesn't exist
pub fn read_expenses_required<P: AsRef<Path>>(path: P) -> Result<Vec<Expense>, ExpenseError> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    decode_expenses(BufReader::new(file), &path.display().to_string())
}

/// Write a ledger file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left untouched.
pub fn write_expenses_atomic<P: AsRef<Path>>(
    path: P,
    expenses: &[Expense],
) -> Result<(), ExpenseError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("csv.tmp");

    let result = write_and_sync(&temp_path, expenses).and_then(|_| {
        fs::rename(&temp_path, path)
            .map_err(|e| ExpenseError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_and_sync(temp_path: &Path, expenses: &[Expense]) -> Result<(), ExpenseError> {
    let file = File::create(temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    encode_expenses(&mut writer, expenses)
        .map_err(|e| ExpenseError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

/// Append one row to a ledger file, creating it if needed
///
/// A missing trailing newline (hand-edited files) is repaired first so the
/// new row never merges into the last one.
pub fn append_expense<P: AsRef<Path>>(path: P, expense: &Expense) -> Result<(), ExpenseError> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    if needs_newline(&mut file)? {
        file.write_all(b"\n")
            .map_err(|e| ExpenseError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    }

    encode_expenses(&mut file, std::slice::from_ref(expense))?;

    file.flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

fn needs_newline(file: &mut File) -> Result<bool, ExpenseError> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(false);
    }

    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use tempfile::TempDir;

    fn expense(date: &str, category: &str, description: &str, amount: &str) -> Expense {
        Expense::new(date, category, description, Amount::parse(amount).unwrap())
    }

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.csv");

        assert!(read_expenses(&path).unwrap().is_empty());
        assert!(read_expenses_required(&path).is_err());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        let data = vec![
            expense("01-01-2024", "Food", "Lunch", "10.50"),
            expense("02-01-2024", "Rent", "January", "900"),
        ];

        write_expenses_atomic(&path, &data).unwrap();
        assert_eq!(read_expenses(&path).unwrap(), data);
    }

    #[test]
    fn test_quoting_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        let data = vec![expense(
            "01-01-2024",
            "Food, drinks",
            "Said \"cheers\"\nsecond line",
            "3",
        )];

        write_expenses_atomic(&path, &data).unwrap();
        let loaded = read_expenses(&path).unwrap();
        assert_eq!(loaded[0].category, "Food, drinks");
        assert_eq!(loaded[0].description, "Said \"cheers\"\nsecond line");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        write_expenses_atomic(&path, &[expense("01-01-2024", "Food", "x", "1")]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("expenses.csv.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("expenses.csv");

        write_expenses_atomic(&path, &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_append_creates_and_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        append_expense(&path, &expense("01-01-2024", "Food", "a", "1")).unwrap();
        append_expense(&path, &expense("02-01-2024", "Food", "b", "2")).unwrap();

        let loaded = read_expenses(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].description, "b");
    }

    #[test]
    fn test_append_repairs_missing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(&path, "01-01-2024,Food,a,1").unwrap();

        append_expense(&path, &expense("02-01-2024", "Rent", "b", "2")).unwrap();

        let loaded = read_expenses(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].category, "Rent");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let data = "01-01-2024,Food,a,1\n\n02-01-2024,Rent,b,2\n";
        let loaded = decode_expenses(data.as_bytes(), "test").unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_wrong_field_count_rejected() {
        let data = "01-01-2024,Food,a,1\n02-01-2024,Rent,2\n";
        let err = decode_expenses(data.as_bytes(), "test").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 2"), "{}", message);
        assert!(message.contains("expected 4 fields"), "{}", message);
    }

    #[test]
    fn test_invalid_row_rejected() {
        let data = "2024-01-01,Food,a,1\n";
        let err = decode_expenses(data.as_bytes(), "test").unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert!(err.to_string().contains("Invalid date"));
    }
}
