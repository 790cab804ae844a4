//! Summary dialog
//!
//! Total and per-category totals of the whole ledger.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::display::{format_bar, format_percentage};
use crate::models::Amount;
use crate::reports::ExpenseSummary;
use crate::tui::layout::centered_rect;

/// Render the summary dialog
pub fn render(frame: &mut Frame, summary: &ExpenseSummary, currency: &str) {
    let area = centered_rect(70, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Summary ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Total
            Constraint::Min(1),    // Categories
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    let total_line = Line::from(vec![
        Span::styled("Total: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.total_amount().format_with_symbol(currency),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({} expenses)", summary.count),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(total_line), chunks[0]);

    if summary.by_category.is_empty() {
        frame.render_widget(
            Paragraph::new("No expenses recorded yet.").style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
    } else {
        let max_total = summary
            .by_category
            .iter()
            .map(|c| c.total)
            .fold(0.0_f64, f64::max);

        let header = Row::new(vec!["Category", "Total", "Share", ""])
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let rows: Vec<Row> = summary
            .by_category
            .iter()
            .map(|entry| {
                Row::new(vec![
                    Cell::from(entry.category.clone()),
                    Cell::from(Amount::from_value(entry.total).format_with_symbol(currency)),
                    Cell::from(format_percentage(entry.percentage)),
                    Cell::from(format_bar(entry.total, max_total, 20))
                        .style(Style::default().fg(Color::Green)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Min(15),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(20),
        ];

        frame.render_widget(Table::new(rows, widths).header(header), chunks[1]);
    }

    frame.render_widget(
        Paragraph::new("Press Esc to close").style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
