//! TUI Views module
//!
//! The main screen is a single expense table with a header and status bar.
//! Dialogs and toasts are drawn on top.

pub mod status_bar;
pub mod table;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);
    table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let area = NotificationWidget::area(frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Expenses ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = if app.search_query.is_empty() {
        Line::from(Span::styled(
            "a:Add  e:Edit  d:Delete  /:Search  s:Summary  x:Export  i:Import",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("\"{}\"", app.search_query),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} of {} shown  (Esc to clear)", app.expenses.len(), app.total_count),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app, "Add Expense"),
        ActiveDialog::EditExpense(id) => {
            dialogs::expense::render(frame, app, &format!("Edit Expense {}", id))
        }
        ActiveDialog::ConfirmDelete(id) => {
            let target = app.expenses.iter().find(|stored| stored.id == id);
            dialogs::confirm::render(frame, id, target, &app.settings.currency_symbol);
        }
        ActiveDialog::Search => dialogs::prompt::render(
            frame,
            "Search",
            &app.search_input,
            "Filters as you type",
        ),
        ActiveDialog::Export => dialogs::prompt::render(
            frame,
            "Export",
            &app.path_input,
            ".csv, .json or .yaml",
        ),
        ActiveDialog::Import => dialogs::prompt::render(
            frame,
            "Import (replaces all)",
            &app.path_input,
            "CSV only",
        ),
        ActiveDialog::Summary => {
            if let Some(summary) = &app.summary {
                dialogs::summary::render(frame, summary, &app.settings.currency_symbol);
            }
        }
        ActiveDialog::Help => dialogs::help::render(frame),
    }
}
