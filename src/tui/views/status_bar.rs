//! Status bar view
//!
//! Shows the row count, the running total and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Amount;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let visible_total: f64 = app
        .expenses
        .iter()
        .map(|stored| stored.expense.amount.value())
        .sum();

    let mut spans = vec![
        Span::styled(" Rows: ", Style::default().fg(Color::White)),
        Span::styled(
            if app.search_query.is_empty() {
                app.total_count.to_string()
            } else {
                format!("{}/{}", app.expenses.len(), app.total_count)
            },
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ "),
        Span::styled("Total: ", Style::default().fg(Color::White)),
        Span::styled(
            Amount::from_value(visible_total).format_with_symbol(&app.settings.currency_symbol),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(selected) = app.selected_id() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Selected {}", selected),
            Style::default().fg(Color::DarkGray),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  ?:Help ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
