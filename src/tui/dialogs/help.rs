//! Help dialog
//!
//! Shows keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Expenses"),
        Line::from(""),
        key_line("a", "Add expense"),
        key_line("e/Enter", "Edit selected expense"),
        key_line("d", "Delete selected expense"),
        key_line("j/k", "Move selection down/up"),
        key_line("g/G", "Go to top/bottom"),
        Line::from(""),
        section("Search"),
        Line::from(""),
        key_line("/", "Search date, category, description"),
        key_line("Esc", "Clear search"),
        Line::from(""),
        section("Data"),
        Line::from(""),
        key_line("s", "Show summary"),
        key_line("x", "Export to file"),
        key_line("i", "Import from CSV (replaces all)"),
        key_line("r", "Reload from disk"),
        Line::from(""),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit"),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(description),
    ])
}
