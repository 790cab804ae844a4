//! Terminal User Interface module
//!
//! A single-screen TUI over the expense ledger using ratatui: a table of
//! expenses with modal dialogs for entry, search, summary and file transfer.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
