//! Delete confirmation dialog
//!
//! Shows the row about to be removed and waits for y/n.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{ExpenseId, StoredExpense};
use crate::tui::layout::centered_rect_fixed;

/// Render the confirmation for deleting `id`
///
/// `target` is the visible row with that id, if it is still on screen.
pub fn render(frame: &mut Frame, id: ExpenseId, target: Option<&StoredExpense>, currency: &str) {
    let area = centered_rect_fixed(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let warn = Style::default().fg(Color::Yellow);
    let block = Block::default()
        .title(format!(" Delete expense {} ", id))
        .title_style(warn.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(warn);

    let field = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:>13} ", name), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    };

    let mut lines = match target {
        Some(stored) => vec![
            field("Date", stored.expense.date.clone()),
            field("Category", stored.expense.category.clone()),
            field("Description", stored.expense.description.clone()),
            field("Amount", stored.expense.amount.format_with_symbol(currency)),
        ],
        None => vec![Line::from("This row is no longer visible.")],
    };

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Remove it from the ledger?  "),
        Span::styled("y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw("es / "),
        Span::styled("n", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw("o"),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
