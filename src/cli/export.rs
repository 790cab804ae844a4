//! CLI command for data export

use std::path::Path;

use crate::error::ExpenseResult;
use crate::export::ExportFormat;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Handle the export command
///
/// Without an explicit format the file extension decides, falling back to CSV.
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    format: Option<ExportFormat>,
) -> ExpenseResult<()> {
    let format = format.unwrap_or_else(|| ExportFormat::from_path(output));
    let count = ExpenseService::new(storage).export_to(output, format)?;

    println!(
        "Exported {} expense(s) as {:?} to: {}",
        count,
        format,
        output.display()
    );

    Ok(())
}
