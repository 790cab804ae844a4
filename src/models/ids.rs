//! Session identifiers for expenses
//!
//! The ledger has no identifier column. When the list is loaded each row is
//! tagged with its position in the full file, and that tag travels with the
//! row through filtering so edit and delete always reach the row the user
//! picked, not whatever happens to sit at the same display position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an expense for the lifetime of one loaded list
///
/// Internally zero-based; displayed one-based with a `#` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(usize);

impl ExpenseId {
    /// Create an ID from a zero-based position in the full list
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based position in the full list
    pub const fn index(&self) -> usize {
        self.0
    }

    /// One-based number shown to users
    pub const fn number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.number())
    }
}

impl FromStr for ExpenseId {
    type Err = ParseExpenseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let number: usize = digits
            .parse()
            .map_err(|_| ParseExpenseIdError(s.to_string()))?;

        if number == 0 {
            return Err(ParseExpenseIdError(s.to_string()));
        }

        Ok(Self(number - 1))
    }
}

/// Error returned when an expense number cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseExpenseIdError(String);

impl fmt::Display for ParseExpenseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid expense number '{}': expected a positive number such as 3 or #3",
            self.0
        )
    }
}

impl std::error::Error for ParseExpenseIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(ExpenseId::from_index(0).to_string(), "#1");
        assert_eq!(ExpenseId::from_index(9).to_string(), "#10");
    }

    #[test]
    fn test_parse() {
        assert_eq!("3".parse::<ExpenseId>().unwrap(), ExpenseId::from_index(2));
        assert_eq!("#1".parse::<ExpenseId>().unwrap(), ExpenseId::from_index(0));
    }

    #[test]
    fn test_parse_rejects_zero_and_garbage() {
        assert!("0".parse::<ExpenseId>().is_err());
        assert!("#".parse::<ExpenseId>().is_err());
        assert!("abc".parse::<ExpenseId>().is_err());
        assert!("-1".parse::<ExpenseId>().is_err());
    }
}
