//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// A required form field was left empty
    #[error("All fields are required: {0} is missing")]
    MissingField(&'static str),

    /// Date does not parse as dd-mm-yyyy
    #[error("Invalid date '{0}'. Please use dd-mm-yyyy")]
    InvalidDate(String),

    /// Amount does not parse as a number
    #[error("Amount must be a number, got '{0}'")]
    InvalidAmount(String),

    /// Edit or delete requested without a selected expense
    #[error("Please select an expense first")]
    NoSelection,

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Backing file errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Backup errors
    #[error("Backup error: {0}")]
    Backup(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a user-correctable input error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::InvalidDate(_) | Self::InvalidAmount(_)
        )
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
