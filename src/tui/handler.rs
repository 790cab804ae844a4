//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::None => handle_normal_key(app, key),
        ActiveDialog::AddExpense | ActiveDialog::EditExpense(_) => handle_form_key(app, key),
        ActiveDialog::ConfirmDelete(_) => handle_confirm_key(app, key),
        ActiveDialog::Search => handle_search_key(app, key),
        ActiveDialog::Export | ActiveDialog::Import => handle_path_key(app, key),
        ActiveDialog::Summary | ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
            ) {
                app.close_dialog();
            }
            Ok(())
        }
    }
}

/// Handle keys when no dialog is open
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_to_bottom(),

        // Expense actions
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('e') | KeyCode::Enter => match app.selected_id() {
            Some(id) => app.open_dialog(ActiveDialog::EditExpense(id)),
            None => app.notify_info("No expense selected"),
        },
        KeyCode::Char('d') | KeyCode::Delete => match app.selected_id() {
            Some(id) => app.open_dialog(ActiveDialog::ConfirmDelete(id)),
            None => app.notify_info("No expense selected"),
        },

        // Search
        KeyCode::Char('/') => app.open_dialog(ActiveDialog::Search),
        KeyCode::Esc => {
            if !app.search_query.is_empty() {
                app.clear_search();
            }
        }

        // Data
        KeyCode::Char('s') => app.open_dialog(ActiveDialog::Summary),
        KeyCode::Char('x') => app.open_dialog(ActiveDialog::Export),
        KeyCode::Char('i') => app.open_dialog(ActiveDialog::Import),
        KeyCode::Char('r') => {
            app.reload();
            app.notify_info("Reloaded");
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys in the expense form
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.save_form(),
        KeyCode::Tab | KeyCode::Down => app.expense_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.expense_form.prev_field(),
        _ => {
            if edit_input(app.expense_form.focused_input(), key) {
                app.expense_form.clear_error();
            }
        }
    }

    Ok(())
}

/// Handle keys in the delete confirmation
fn handle_confirm_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }

    Ok(())
}

/// Handle keys in the search prompt
///
/// The table filters live while typing. Enter keeps the filter, Esc drops it.
fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.close_dialog(),
        KeyCode::Esc => {
            app.close_dialog();
            app.clear_search();
        }
        _ => {
            if edit_input(&mut app.search_input, key) {
                let query = app.search_input.value().to_string();
                app.set_search(query);
            }
        }
    }

    Ok(())
}

/// Handle keys in the export/import path prompt
fn handle_path_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            if app.path_input.value().trim().is_empty() {
                app.notify_info("Enter a file path");
            } else if app.active_dialog == ActiveDialog::Export {
                app.run_export();
            } else {
                app.run_import();
            }
        }
        _ => {
            edit_input(&mut app.path_input, key);
        }
    }

    Ok(())
}

/// Apply a text editing key to an input, returning whether the content changed
fn edit_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::settings::Settings;
    use crate::models::ExpenseId;
    use crate::services::ExpenseService;
    use crate::storage::Storage;
    use crate::validation::ExpenseInput;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn seed(storage: &Storage) {
        let service = ExpenseService::new(storage);
        for (date, category, description, amount) in [
            ("01-01-2024", "Food", "Lunch", "10"),
            ("02-01-2024", "Travel", "Taxi", "20"),
            ("03-01-2024", "Food", "Dinner", "30"),
        ] {
            service
                .add(&ExpenseInput::new(date, category, description, amount))
                .unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn clear_field(app: &mut App) {
        press(app, KeyCode::End);
        for _ in 0..32 {
            press(app, KeyCode::Backspace);
        }
    }

    #[test]
    fn test_add_through_form() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.reload();

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);

        clear_field(&mut app);
        type_text(&mut app, "05-05-2025");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Travel");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Taxi");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "23.40");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(app.expenses.len(), 1);
        assert_eq!(app.expenses[0].expense.category, "Travel");
        assert_eq!(app.expenses[0].expense.amount.as_str(), "23.40");
    }

    #[test]
    fn test_invalid_form_shows_error() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert!(app.expense_form.error_message.is_some());

        // Typing clears the stale error
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "F");
        assert!(app.expense_form.error_message.is_none());
    }

    #[test]
    fn test_search_then_edit_reaches_matching_row() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.reload();

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "dinner");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.expenses.len(), 1);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(
            app.active_dialog,
            ActiveDialog::EditExpense(ExpenseId::from_index(2))
        );

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        clear_field(&mut app);
        type_text(&mut app, "Supper");
        press(&mut app, KeyCode::Enter);

        let all = ExpenseService::new(&storage).list().unwrap();
        assert_eq!(all[0].expense.description, "Lunch");
        assert_eq!(all[2].expense.description, "Supper");
        assert!(app.expenses.is_empty(), "filter still applied");
    }

    #[test]
    fn test_escape_clears_search() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.reload();

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "food");
        assert_eq!(app.expenses.len(), 2);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(app.expenses.len(), 3);
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.reload();

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(
            app.active_dialog,
            ActiveDialog::ConfirmDelete(ExpenseId::from_index(1))
        );

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(storage.expenses.count().unwrap(), 3);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(storage.expenses.count().unwrap(), 2);

        let remaining = ExpenseService::new(&storage).list().unwrap();
        assert_eq!(remaining[1].expense.description, "Dinner");
    }

    #[test]
    fn test_edit_with_empty_list_notifies() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.reload();

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn test_export_prompt_writes_file() {
        let (temp_dir, storage) = create_test_storage();
        seed(&storage);
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.reload();

        let target = temp_dir.path().join("out.json");
        press(&mut app, KeyCode::Char('x'));
        app.path_input.set_value(target.display().to_string());
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::None);
        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.contains("\"expense_count\": 3"));
    }

    #[test]
    fn test_quit() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
