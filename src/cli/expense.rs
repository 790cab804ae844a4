//! Expense CLI commands
//!
//! Implements the add, list, edit, delete and search commands.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::ExpenseResult;
use crate::models::ExpenseId;
use crate::services::ExpenseService;
use crate::storage::Storage;
use crate::validation::ExpenseInput;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Date (dd-mm-yyyy)
        date: String,
        /// Category
        category: String,
        /// Description
        description: String,
        /// Amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Change an expense; omitted fields keep their current value
    Edit {
        /// Expense number as shown by list or search
        id: ExpenseId,
        /// New date (dd-mm-yyyy)
        #[arg(short, long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense number as shown by list or search
        id: ExpenseId,
    },

    /// Search date, category and description (case-insensitive)
    Search {
        /// Text to look for
        query: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            date,
            category,
            description,
            amount,
        } => {
            let added = service.add(&ExpenseInput::new(date, category, description, amount))?;
            println!("Added expense {}", added.id);
            print!("{}", format_expense_details(&added, currency));
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            print!("{}", format_expense_table(&expenses, currency));
            if !expenses.is_empty() {
                println!("Total: {} expense(s)", expenses.len());
            }
        }

        ExpenseCommands::Edit {
            id,
            date,
            category,
            description,
            amount,
        } => {
            let input = match (date, category, description, amount) {
                (Some(date), Some(category), Some(description), Some(amount)) => {
                    ExpenseInput::new(date, category, description, amount)
                }
                (date, category, description, amount) => {
                    let mut input = ExpenseInput::from_expense(&service.get(id)?.expense);
                    if let Some(date) = date {
                        input.date = date;
                    }
                    if let Some(category) = category {
                        input.category = category;
                    }
                    if let Some(description) = description {
                        input.description = description;
                    }
                    if let Some(amount) = amount {
                        input.amount = amount;
                    }
                    input
                }
            };

            let updated = service.update(Some(id), &input)?;
            println!("Updated expense {}", updated.id);
            print!("{}", format_expense_details(&updated, currency));
        }

        ExpenseCommands::Delete { id } => {
            let removed = service.delete(Some(id))?;
            println!("Deleted expense {}: {}", id, removed.label());
        }

        ExpenseCommands::Search { query } => {
            let results = service.search(&query)?;
            print!("{}", format_expense_table(&results, currency));
            if !results.is_empty() {
                println!("{} match(es) for '{}'", results.len(), query);
            }
        }
    }

    Ok(())
}
