//! CLI command for the expense summary

use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Print the total and per-category totals
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    json: bool,
) -> ExpenseResult<()> {
    let summary = ExpenseService::new(storage).summary()?;

    if json {
        let output = serde_json::to_string_pretty(&summary)
            .map_err(|e| ExpenseError::Json(e.to_string()))?;
        println!("{}", output);
    } else {
        print!("{}", format_summary(&summary, &settings.currency_symbol));
    }

    Ok(())
}
