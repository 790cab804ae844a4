//! Summary formatting for terminal output

use crate::models::Amount;
use crate::reports::ExpenseSummary;

const BAR_WIDTH: usize = 20;

/// Format the total and per-category breakdown, two decimals throughout
pub fn format_summary(summary: &ExpenseSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total: {} ({} expense{})\n",
        summary.total_amount().format_with_symbol(currency),
        summary.count,
        if summary.count == 1 { "" } else { "s" }
    ));

    if summary.by_category.is_empty() {
        return output;
    }

    output.push_str("\nBy category:\n");

    let name_width = summary
        .by_category
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0);
    let max_total = summary
        .by_category
        .iter()
        .map(|c| c.total)
        .fold(0.0_f64, f64::max);

    for entry in &summary.by_category {
        output.push_str(&format!(
            "  {:<width$}  {:>12}  {:>6}  {}\n",
            entry.category,
            Amount::from_value(entry.total).format_with_symbol(currency),
            format_percentage(entry.percentage),
            format_bar(entry.total, max_total, BAR_WIDTH),
            width = name_width
        ));
    }

    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
