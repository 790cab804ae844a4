//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are owned by [`TerminalGuard`], which
//! puts the terminal back on drop. A panic hook does the same before the
//! panic message is printed.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::storage::Storage;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;
use super::views;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Terminal in TUI mode for as long as the guard lives
pub struct TerminalGuard {
    pub terminal: Tui,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen
    pub fn new() -> Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;

        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

/// Leave the alternate screen and raw mode
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits
pub fn run_tui(storage: &Storage, settings: &Settings) -> Result<()> {
    let mut guard = TerminalGuard::new()?;

    let mut app = App::new(storage, settings);
    app.reload();

    let events = EventHandler::default();

    while !app.should_quit {
        guard.terminal.draw(|frame| views::render(frame, &app))?;

        handle_event(&mut app, events.next()?)?;
    }

    Ok(())
}
