//! Input validation for expenses
//!
//! Turns four raw text inputs into an [`Expense`]. The same checks guard rows
//! read back from a ledger file, so every persisted row satisfies them.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, Amount, Expense};

/// Raw, unvalidated form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

impl ExpenseInput {
    /// Create an input from the four form fields
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// Pre-fill an input from an existing expense (edit forms)
    pub fn from_expense(expense: &Expense) -> Self {
        Self::new(
            &expense.date,
            &expense.category,
            &expense.description,
            expense.amount.as_str(),
        )
    }

    /// Validate this input
    pub fn validate(&self) -> ExpenseResult<Expense> {
        validate(&self.date, &self.category, &self.description, &self.amount)
    }
}

/// Validate the four expense fields
///
/// Checks run in order: every field present, then the date, then the amount.
/// Text fields and the date are returned unchanged.
pub fn validate(
    date: &str,
    category: &str,
    description: &str,
    amount: &str,
) -> ExpenseResult<Expense> {
    for (name, value) in [
        ("date", date),
        ("category", category),
        ("description", description),
        ("amount", amount),
    ] {
        if value.trim().is_empty() {
            return Err(ExpenseError::MissingField(name));
        }
    }

    if parse_date(date).is_none() {
        return Err(ExpenseError::InvalidDate(date.to_string()));
    }

    let amount =
        Amount::parse(amount).map_err(|e| ExpenseError::InvalidAmount(e.input().to_string()))?;

    Ok(Expense::new(date, category, description, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let expense = validate("05-05-2025", "Travel", "Taxi", "23.40").unwrap();
        assert_eq!(expense.date, "05-05-2025");
        assert_eq!(expense.category, "Travel");
        assert_eq!(expense.description, "Taxi");
        assert_eq!(expense.amount.value(), 23.4);
        assert_eq!(expense.amount.as_str(), "23.40");
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(
            validate("", "Food", "desc", "10"),
            Err(ExpenseError::MissingField("date"))
        ));
        assert!(matches!(
            validate("01-01-2024", "", "desc", "10"),
            Err(ExpenseError::MissingField("category"))
        ));
        assert!(matches!(
            validate("01-01-2024", "Food", "   ", "10"),
            Err(ExpenseError::MissingField("description"))
        ));
        assert!(matches!(
            validate("01-01-2024", "Food", "desc", ""),
            Err(ExpenseError::MissingField("amount"))
        ));
    }

    #[test]
    fn test_missing_field_checked_before_format() {
        // Empty amount wins over the malformed date
        assert!(matches!(
            validate("bad", "Food", "desc", ""),
            Err(ExpenseError::MissingField("amount"))
        ));
    }

    #[test]
    fn test_invalid_dates() {
        for date in [
            "2024-01-05",
            "31-13-2024",
            "31-02-2024",
            "abc",
            "05-05-0",
            "05-05-+2025",
            "05-05- 2025",
            " 05-05-2025",
            "05-05-2025 ",
            "05-05-20250",
            "05 -05-2025",
            "005-05-2025",
            "5-5-2025x",
            "05-05-2025-01",
        ] {
            assert!(
                matches!(
                    validate(date, "Food", "desc", "10"),
                    Err(ExpenseError::InvalidDate(_))
                ),
                "{} should be rejected",
                date
            );
        }
    }

    #[test]
    fn test_invalid_amount() {
        assert!(matches!(
            validate("01-01-2024", "Food", "desc", "ten"),
            Err(ExpenseError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_input_round_trip_through_expense() {
        let input = ExpenseInput::new("01-01-2024", "Food", "Lunch", "9.99");
        let expense = input.validate().unwrap();
        assert_eq!(ExpenseInput::from_expense(&expense), input);
    }
}
