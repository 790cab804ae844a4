//! Diff generation for audit logging
//!
//! Expenses are flat, so a diff is a list of changed columns.

use crate::models::Expense;

/// Generate a human-readable diff between two versions of an expense
///
/// Returns `None` when nothing changed. Amounts compare by their stored text
/// so "10" -> "10.00" is still reported.
pub fn generate_diff(before: &Expense, after: &Expense) -> Option<String> {
    let columns = ["date", "category", "description", "amount"];

    let changes: Vec<String> = columns
        .iter()
        .zip(before.to_fields().iter().zip(after.to_fields().iter()))
        .filter(|(_, (b, a))| b != a)
        .map(|(name, (b, a))| format!("{}: {} -> {}", name, quote(b), quote(a)))
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Quote a value, truncating long text
fn quote(value: &str) -> String {
    if value.chars().count() > 50 {
        let head: String = value.chars().take(47).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn expense(date: &str, category: &str, description: &str, amount: &str) -> Expense {
        Expense::new(date, category, description, Amount::parse(amount).unwrap())
    }

    #[test]
    fn test_single_field_change() {
        let before = expense("01-01-2024", "Food", "Lunch", "10");
        let after = expense("01-01-2024", "Food", "Lunch", "12");

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "amount: \"10\" -> \"12\"");
    }

    #[test]
    fn test_multiple_changes() {
        let before = expense("01-01-2024", "Food", "Lunch", "10");
        let after = expense("02-01-2024", "Dining", "Lunch", "10");

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("date: \"01-01-2024\" -> \"02-01-2024\""));
        assert!(diff.contains("category: \"Food\" -> \"Dining\""));
        assert!(!diff.contains("description"));
    }

    #[test]
    fn test_no_changes() {
        let e = expense("01-01-2024", "Food", "Lunch", "10");
        assert!(generate_diff(&e, &e.clone()).is_none());
    }

    #[test]
    fn test_amount_text_change_reported() {
        let before = expense("01-01-2024", "Food", "Lunch", "10");
        let after = expense("01-01-2024", "Food", "Lunch", "10.00");
        assert!(generate_diff(&before, &after).is_some());
    }

    #[test]
    fn test_long_text_truncated() {
        let before = expense("01-01-2024", "Food", &"é".repeat(100), "1");
        let after = expense("01-01-2024", "Food", "short", "1");

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }
}
