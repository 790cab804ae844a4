//! Expense entry/edit dialog
//!
//! Modal form with the four expense fields, tab navigation, inline
//! validation errors and save/cancel.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{StoredExpense, DATE_FORMAT};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;
use crate::validation::ExpenseInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Date,
    Category,
    Description,
    Amount,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,
    pub date_input: TextInput,
    pub category_input: TextInput,
    pub description_input: TextInput,
    pub amount_input: TextInput,
    /// Validation error from the last save attempt
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Empty form with today's date filled in
    pub fn new() -> Self {
        let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
        Self::with_values(ExpenseInput::new(today, "", "", ""))
    }

    /// Form pre-filled from an existing expense
    pub fn from_expense(stored: &StoredExpense) -> Self {
        Self::with_values(ExpenseInput::from_expense(&stored.expense))
    }

    fn with_values(values: ExpenseInput) -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("dd-mm-yyyy")
                .content(values.date),
            category_input: TextInput::new()
                .label("Category")
                .placeholder("e.g. Food")
                .content(values.category),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("What was it for?")
                .content(values.description),
            amount_input: TextInput::new()
                .label("Amount")
                .placeholder("0.00")
                .content(values.amount),
            error_message: None,
        };
        state.update_focus();
        state
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.date_input.focused = self.focused_field == ExpenseField::Date;
        self.category_input.focused = self.focused_field == ExpenseField::Category;
        self.description_input.focused = self.focused_field == ExpenseField::Description;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Date => &mut self.date_input,
            ExpenseField::Category => &mut self.category_input,
            ExpenseField::Description => &mut self.description_input,
            ExpenseField::Amount => &mut self.amount_input,
        }
    }

    /// The raw field values, ready for validation
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput::new(
            self.date_input.value(),
            self.category_input.value(),
            self.description_input.value(),
            self.amount_input.value(),
        )
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App, title: &str) {
    let area = centered_rect_fixed(64, 11, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
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
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    frame.render_widget(&form.date_input, chunks[0]);
    frame.render_widget(&form.category_input, chunks[1]);
    frame.render_widget(&form.description_input, chunks[2]);
    frame.render_widget(&form.amount_input, chunks[3]);

    if let Some(error) = &form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Shift+Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Prev  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}
