//! Expense table view
//!
//! Shows the visible rows with the ids they have in the full ledger.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::truncate;
use crate::tui::app::App;

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.expenses.is_empty() {
        let message = if app.search_query.is_empty() {
            "No expenses. Press 'a' to add one."
        } else {
            "No expenses match the search."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(6),  // #
        Constraint::Length(12), // Date
        Constraint::Length(16), // Category
        Constraint::Min(20),    // Description
        Constraint::Length(14), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#").style(bold),
        Cell::from("Date").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let currency = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = app
        .expenses
        .iter()
        .map(|stored| {
            let expense = &stored.expense;
            Row::new(vec![
                Cell::from(stored.id.to_string()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(expense.date.clone()),
                Cell::from(truncate(&expense.category, 16)),
                Cell::from(truncate(&expense.description, 40)),
                Cell::from(format!(
                    "{:>12}",
                    expense.amount.format_with_symbol(currency)
                ))
                .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
