//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The ledger itself stays on disk; `reload` refreshes the visible rows after
//! every mutation.

use std::path::PathBuf;

use crate::backup::BackupManager;
use crate::config::settings::Settings;
use crate::error::ExpenseError;
use crate::export::ExportFormat;
use crate::models::{ExpenseId, StoredExpense};
use crate::reports::ExpenseSummary;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::dialogs::expense::ExpenseFormState;
use super::widgets::{Notification, NotificationQueue, TextInput};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    EditExpense(ExpenseId),
    ConfirmDelete(ExpenseId),
    Search,
    Summary,
    Export,
    Import,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Rows currently shown, with their ids in the full ledger
    pub expenses: Vec<StoredExpense>,

    /// Number of rows in the full ledger
    pub total_count: usize,

    /// Active search filter; empty shows everything
    pub search_query: String,

    /// Search prompt input
    pub search_input: TextInput,

    /// Export/import path prompt input
    pub path_input: TextInput,

    /// Expense form state
    pub expense_form: ExpenseFormState,

    /// Selected row in `expenses`
    pub selected_index: usize,

    /// Summary shown by the summary dialog
    pub summary: Option<ExpenseSummary>,

    /// Toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            expenses: Vec::new(),
            total_count: 0,
            search_query: String::new(),
            search_input: TextInput::new()
                .label("Search")
                .placeholder("date, category or description"),
            path_input: TextInput::new().label("File"),
            expense_form: ExpenseFormState::new(),
            selected_index: 0,
            summary: None,
            notifications: NotificationQueue::new(),
        }
    }

    fn service(&self) -> ExpenseService<'a> {
        ExpenseService::new(self.storage)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Re-read the ledger and re-apply the search filter
    ///
    /// The selection follows the previously selected id when it is still
    /// visible and is clamped otherwise.
    pub fn reload(&mut self) {
        let previous = self.selected_id();
        let service = self.service();

        let loaded = service
            .list()
            .map(|all| {
                let total = all.len();
                let visible: Vec<StoredExpense> = all
                    .into_iter()
                    .filter(|stored| stored.expense.matches_query(&self.search_query))
                    .collect();
                (total, visible)
            });

        match loaded {
            Ok((total, visible)) => {
                self.total_count = total;
                self.expenses = visible;
            }
            Err(e) => {
                self.total_count = 0;
                self.expenses.clear();
                self.notify_error(&e);
            }
        }

        self.selected_index = previous
            .and_then(|id| self.expenses.iter().position(|stored| stored.id == id))
            .unwrap_or(self.selected_index)
            .min(self.expenses.len().saturating_sub(1));
    }

    /// Id of the selected row, if any row is visible
    pub fn selected_id(&self) -> Option<ExpenseId> {
        self.expenses.get(self.selected_index).map(|stored| stored.id)
    }

    /// The selected row
    pub fn selected_expense(&self) -> Option<&StoredExpense> {
        self.expenses.get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.expenses.len() {
            self.selected_index += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.expenses.len().saturating_sub(1);
    }

    /// Open a dialog, preparing its state
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::new();
            }
            ActiveDialog::EditExpense(id) => {
                match self.expenses.iter().find(|stored| stored.id == id) {
                    Some(stored) => self.expense_form = ExpenseFormState::from_expense(stored),
                    None => {
                        self.notify_error(&ExpenseError::expense_not_found(id.to_string()));
                        return;
                    }
                }
            }
            ActiveDialog::Search => {
                self.search_input.set_value(self.search_query.clone());
                self.search_input.focused = true;
            }
            ActiveDialog::Export | ActiveDialog::Import => {
                self.path_input.set_value(default_path(dialog));
                self.path_input.focused = true;
            }
            ActiveDialog::Summary => match self.service().summary() {
                Ok(summary) => self.summary = Some(summary),
                Err(e) => {
                    self.notify_error(&e);
                    return;
                }
            },
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.search_input.focused = false;
        self.path_input.focused = false;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::success(message));
    }

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::info(message));
    }

    pub fn notify_error(&mut self, error: &ExpenseError) {
        self.notifications.push(Notification::from_error(error));
    }

    /// Save the expense form as a new row or over the edited one
    ///
    /// Validation errors stay in the form; anything else closes it.
    pub fn save_form(&mut self) {
        let input = self.expense_form.to_input();
        let service = self.service();

        let result = match self.active_dialog {
            ActiveDialog::AddExpense => service.add(&input).map(|stored| {
                format!("Added expense {}", stored.id)
            }),
            ActiveDialog::EditExpense(id) => service
                .update(Some(id), &input)
                .map(|stored| format!("Updated expense {}", stored.id)),
            _ => return,
        };

        match result {
            Ok(message) => {
                self.close_dialog();
                self.reload();
                self.notify_success(message);
            }
            Err(e) if e.is_validation() => {
                self.expense_form.set_error(e.to_string());
            }
            Err(e) => {
                self.close_dialog();
                self.reload();
                self.notify_error(&e);
            }
        }
    }

    /// Delete the expense the confirmation was opened for
    pub fn confirm_delete(&mut self) {
        let ActiveDialog::ConfirmDelete(id) = self.active_dialog else {
            return;
        };
        self.close_dialog();

        match self.service().delete(Some(id)) {
            Ok(removed) => {
                self.reload();
                self.notify_success(format!("Deleted {}", removed.label()));
            }
            Err(e) => {
                self.reload();
                self.notify_error(&e);
            }
        }
    }

    /// Filter the table by the given query
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.selected_index = 0;
        self.reload();
    }

    /// Drop the search filter
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.set_search(String::new());
    }

    /// Export the whole ledger to the path in the prompt
    pub fn run_export(&mut self) {
        let path = PathBuf::from(self.path_input.value().trim());
        self.close_dialog();

        let format = ExportFormat::from_path(&path);
        match self.service().export_to(&path, format) {
            Ok(count) => {
                self.notify_success(format!("Exported {} expenses to {}", count, path.display()))
            }
            Err(e) => self.notify_error(&e),
        }
    }

    /// Replace the ledger with the CSV at the path in the prompt
    pub fn run_import(&mut self) {
        let path = PathBuf::from(self.path_input.value().trim());
        self.close_dialog();

        let manager = BackupManager::new(
            self.storage.paths(),
            self.settings.backup_retention.clone(),
        );
        let backups = self.settings.backup_before_import.then_some(&manager);

        match self.service().import_from(&path, backups) {
            Ok(result) => {
                self.selected_index = 0;
                self.reload();
                self.notify_success(format!(
                    "Imported {} expenses (replaced {})",
                    result.imported, result.replaced
                ));
                if let Some(backup) = result.backup {
                    self.notify_info(format!("Previous ledger saved to {}", backup.display()));
                }
            }
            Err(e) => self.notify_error(&e),
        }
    }
}

fn default_path(dialog: ActiveDialog) -> &'static str {
    match dialog {
        ActiveDialog::Export => "expenses-export.csv",
        _ => "expenses-import.csv",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
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

    #[test]
    fn test_reload_loads_all_rows() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);
        let settings = Settings::default();

        let mut app = App::new(&storage, &settings);
        app.reload();

        assert_eq!(app.total_count, 3);
        assert_eq!(app.expenses.len(), 3);
        assert_eq!(app.selected_id(), Some(ExpenseId::from_index(0)));
    }

    #[test]
    fn test_search_keeps_ledger_ids() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);
        let settings = Settings::default();

        let mut app = App::new(&storage, &settings);
        app.set_search("dinner");

        assert_eq!(app.expenses.len(), 1);
        assert_eq!(app.total_count, 3);
        assert_eq!(app.selected_id(), Some(ExpenseId::from_index(2)));
    }

    #[test]
    fn test_selection_clamped_after_delete() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);
        let settings = Settings::default();

        let mut app = App::new(&storage, &settings);
        app.reload();
        app.move_to_bottom();
        app.active_dialog = ActiveDialog::ConfirmDelete(ExpenseId::from_index(2));
        app.confirm_delete();

        assert_eq!(app.expenses.len(), 2);
        assert_eq!(app.selected_index, 1);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_save_form_validation_error_stays_open() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let mut app = App::new(&storage, &settings);
        app.open_dialog(ActiveDialog::AddExpense);
        app.save_form();

        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert!(app.expense_form.error_message.is_some());
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_import_missing_file_notifies() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);
        let settings = Settings::default();

        let mut app = App::new(&storage, &settings);
        app.open_dialog(ActiveDialog::Import);
        app.path_input.set_value("/definitely/not/here.csv");
        app.run_import();

        assert_eq!(storage.expenses.count().unwrap(), 3);
        assert!(!app.notifications.is_empty());
    }
}
