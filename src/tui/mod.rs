//! Interactive search form
//!
//! A full-screen form built on `ratatui`/`crossterm`: fill in the criteria, press Enter to
//! generate the query, then copy it or open it in the browser. Past criteria live in a
//! history dialog with fuzzy filtering.

mod app;
mod events;
mod form;
mod history_view;
mod layout;
mod palette;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::{App, MessageType, Screen, StatusMessage};
pub use form::{FormField, FormState};
pub use palette::Palette;
use terminal::TerminalManager;

use crate::storage::Store;

/// Run the interactive TUI until the user quits
pub fn run_interactive<S: Store>(store: S) -> Result<()> {
    let mut app = App::new(store);

    let mut manager = TerminalManager::new()?;
    let res = app.run(manager.terminal_mut());
    manager.restore()?;

    res
}
