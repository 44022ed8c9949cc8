//! TUI application state and event handling.
//!
//! This module implements the interactive search form. It manages:
//!
//! - **Form editing**: Six fields mirroring [`SearchCriteria`], two of them selectors
//! - **Generation**: Validate, synthesize, and record the criteria in history on Enter
//! - **History dialog**: Past queries with fuzzy filtering, autofill, copy and clear
//! - **Theme**: Dark/light palette toggle persisted in the same store as history
//! - **Status messages**: Transient feedback for clipboard, browser and storage outcomes
//! - **Dirty state tracking**: Redraw only when state changes (or periodically for resizes)
//!
//! # Architecture
//!
//! `App` owns the [`HistoryStore`] (and through it the [`Store`]) plus all UI state, and
//! runs the event loop via `run()`. Actions are interpreted per [`Screen`]: the same key
//! moves field focus on the form and moves the selection in the history dialog.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::form::FormState;
use super::history_view::HistoryView;
use super::palette::Palette;
use super::rendering::{HistoryRender, RenderState, render_ui};
use crate::browser::open_in_browser;
use crate::clipboard::copy_to_clipboard;
use crate::history::HistoryStore;
use crate::models::SearchCriteria;
use crate::query::{search_url, synthesize};
use crate::storage::Store;
use crate::theme::{load_dark_theme, save_dark_theme};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which view receives key actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    History,
}

pub struct App<S: Store> {
    history: HistoryStore<S>,
    form: FormState,
    search_string: String,
    screen: Screen,
    history_view: HistoryView,
    dark_theme: bool,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<S: Store> App<S> {
    pub fn new(store: S) -> Self {
        let dark_theme = load_dark_theme(&store);
        let history = HistoryStore::new(store);
        let history_view = HistoryView::new(history.list());

        Self {
            history,
            form: FormState::new(),
            search_string: String::new(),
            screen: Screen::Form,
            history_view,
            dark_theme,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType) {
        let duration_ms = match message_type {
            MessageType::Success => STATUS_SUCCESS_DURATION_MS,
            MessageType::Error => STATUS_ERROR_DURATION_MS,
        };
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn success(&mut self, text: impl Into<String>) {
        self.set_status(format!("✓ {}", text.into()), MessageType::Success);
    }

    fn error(&mut self, text: impl Into<String>) {
        self.set_status(format!("✗ {}", text.into()), MessageType::Error);
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            if self.screen == Screen::History {
                self.history_view.tick();
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let matched_items = self.history_view.matched_items();
                terminal.draw(|f| {
                    let history = (self.screen == Screen::History).then(|| HistoryRender {
                        items: &matched_items,
                        selected_idx: self.history_view.selected_idx(),
                        filter: self.history_view.filter(),
                        total_count: self.history_view.total_count(),
                    });
                    let state = RenderState {
                        form: &self.form,
                        search_string: &self.search_string,
                        palette: Palette::for_theme(self.dark_theme),
                        dark_theme: self.dark_theme,
                        status_message: self.status_message.as_ref(),
                        history,
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match self.screen {
            Screen::Form => self.handle_form_action(action),
            Screen::History => self.handle_history_action(action),
        }
    }

    fn handle_form_action(&mut self, action: Action) {
        let changed = match action {
            Action::Quit | Action::Back => {
                self.should_quit = true;
                false
            }
            Action::NextField | Action::MoveDown => {
                self.form.focus_next();
                true
            }
            Action::PrevField | Action::MoveUp => {
                self.form.focus_prev();
                true
            }
            Action::CycleNext => self.form.cycle_selection(1),
            Action::CyclePrev => self.form.cycle_selection(-1),
            Action::Input(c) => self.form.insert_char(c),
            Action::DeleteChar => self.form.delete_char(),
            Action::Submit => {
                self.generate();
                false
            }
            Action::Reset => {
                self.form.reset();
                self.search_string.clear();
                true
            }
            Action::CopyToClipboard => {
                let query = self.search_string.clone();
                self.copy_query(&query);
                false
            }
            Action::OpenInBrowser => {
                let query = self.search_string.clone();
                self.open_query(&query);
                false
            }
            Action::ToggleHistory => {
                self.open_history();
                true
            }
            Action::ToggleTheme => {
                self.toggle_theme();
                true
            }
            Action::ClearHistory | Action::None => false,
        };

        if changed {
            self.needs_redraw = true;
        }
    }

    fn handle_history_action(&mut self, action: Action) {
        let changed = match action {
            Action::Quit => {
                self.should_quit = true;
                false
            }
            Action::Back | Action::ToggleHistory => {
                self.screen = Screen::Form;
                true
            }
            Action::MoveUp | Action::PrevField => self.history_view.move_selection(-1),
            Action::MoveDown | Action::NextField => self.history_view.move_selection(1),
            Action::Input(c) => self.history_view.push_filter_char(c),
            Action::DeleteChar => self.history_view.pop_filter_char(),
            Action::Submit => {
                self.autofill_selected();
                true
            }
            Action::CopyToClipboard => {
                let query = self.history_view.selected().map(|item| item.query.clone());
                self.copy_query(query.as_deref().unwrap_or(""));
                false
            }
            Action::OpenInBrowser => {
                let query = self.history_view.selected().map(|item| item.query.clone());
                self.open_query(query.as_deref().unwrap_or(""));
                false
            }
            Action::ClearHistory => {
                self.clear_history();
                true
            }
            Action::ToggleTheme => {
                self.toggle_theme();
                true
            }
            Action::CycleNext | Action::CyclePrev | Action::Reset | Action::None => false,
        };

        if changed {
            self.needs_redraw = true;
        }
    }

    /// Validate the form, render the query and remember the criteria
    fn generate(&mut self) {
        let criteria = self.form.criteria.clone();
        if let Err(e) = criteria.validate() {
            self.error(e.to_string());
            return;
        }

        self.search_string = synthesize(&criteria);

        match self.history.add(&criteria) {
            Ok(()) => self.success("Search string generated"),
            Err(e) => self.error(format!("Search string generated, history not saved: {}", e)),
        }
    }

    fn copy_query(&mut self, query: &str) {
        if query.is_empty() {
            self.error("No search query to copy, generate a search query first");
            return;
        }

        match copy_to_clipboard(query) {
            Ok(()) => self.success("Search query copied to clipboard"),
            Err(e) => self.error(format!("Clipboard error: {}", e)),
        }
    }

    fn open_query(&mut self, query: &str) {
        if query.is_empty() {
            self.error("No search query to open, generate a search query first");
            return;
        }

        match open_in_browser(&search_url(query)) {
            Ok(()) => self.success("Opened in browser"),
            Err(e) => self.error(format!("Browser error: {}", e)),
        }
    }

    fn open_history(&mut self) {
        self.history_view.reload(self.history.list());
        self.screen = Screen::History;
    }

    /// Copy the selected history record into the form and output
    fn autofill_selected(&mut self) {
        let Some(criteria) = self.history_view.selected().map(|item| item.criteria.clone()) else {
            self.error("No history entry selected");
            return;
        };

        self.search_string = synthesize(&criteria);
        self.form.fill(criteria);
        self.screen = Screen::Form;
        self.success("Form filled from history");
    }

    fn clear_history(&mut self) {
        match self.history.clear() {
            Ok(()) => self.success("Search history cleared"),
            Err(e) => self.error(format!("Could not clear history: {}", e)),
        }
        self.history_view.reload(self.history.list());
    }

    fn toggle_theme(&mut self) {
        // Switches for this session even when saving fails
        self.dark_theme = !self.dark_theme;
        if let Err(e) = save_dark_theme(self.history.store_mut(), self.dark_theme) {
            self.error(format!("Theme not saved: {}", e));
        }
    }

    /// Current form criteria (for callers embedding the app)
    pub fn criteria(&self) -> &SearchCriteria {
        &self.form.criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HISTORY_KEY;
    use crate::models::{FileType, TermsAppearing};
    use crate::storage::MemoryStore;
    use crate::theme::THEME_KEY;
    use crate::tui::form::FormField;

    fn type_text(app: &mut App<MemoryStore>, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::Input(c));
        }
    }

    fn status_text(app: &App<MemoryStore>) -> &str {
        app.status_message.as_ref().map(|msg| msg.text.as_str()).unwrap_or("")
    }

    #[test]
    fn test_app_new_initializes_state() {
        let app = App::new(MemoryStore::new());

        assert_eq!(app.screen, Screen::Form);
        assert_eq!(app.form, FormState::new());
        assert!(app.search_string.is_empty());
        assert!(!app.dark_theme);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_app_loads_saved_theme() {
        let app = App::new(MemoryStore::new().with_entry(THEME_KEY, "true"));
        assert!(app.dark_theme);
    }

    #[test]
    fn test_quit_and_escape_on_form() {
        let mut app = App::new(MemoryStore::new());
        app.handle_action(Action::Quit);
        assert!(app.should_quit);

        let mut app = App::new(MemoryStore::new());
        app.handle_action(Action::Back);
        assert!(app.should_quit);
    }

    #[test]
    fn test_generate_requires_keyword() {
        let mut app = App::new(MemoryStore::new());
        app.handle_action(Action::Submit);

        assert!(app.search_string.is_empty());
        assert_eq!(app.status_message.as_ref().map(|m| m.message_type), Some(MessageType::Error));
        assert!(status_text(&app).contains("Enter at least one keyword"));
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_generate_builds_query_and_records_history() {
        let mut app = App::new(MemoryStore::new());
        type_text(&mut app, "cats");
        app.handle_action(Action::NextField);
        type_text(&mut app, "maine coon, tabby");
        app.handle_action(Action::MoveUp);
        app.handle_action(Action::PrevField);
        assert_eq!(app.form.focus, FormField::FileType);
        app.handle_action(Action::CycleNext);
        app.handle_action(Action::Submit);

        assert_eq!(app.search_string, r#"cats "maine coon" "tabby" filetype:pdf"#);
        assert_eq!(app.history.len(), 1);
        assert!(status_text(&app).contains("generated"));
    }

    #[test]
    fn test_generate_twice_keeps_single_history_entry() {
        let mut app = App::new(MemoryStore::new());
        type_text(&mut app, "cats");
        app.handle_action(Action::Submit);
        app.handle_action(Action::Submit);

        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_generate_with_unavailable_store_still_shows_query() {
        let mut app = App::new(MemoryStore::unavailable());
        type_text(&mut app, "cats");
        app.handle_action(Action::Submit);

        assert_eq!(app.search_string, "cats");
        assert_eq!(app.status_message.as_ref().map(|m| m.message_type), Some(MessageType::Error));
        assert!(status_text(&app).contains("history not saved"));
    }

    #[test]
    fn test_reset_clears_form_and_output() {
        let mut app = App::new(MemoryStore::new());
        type_text(&mut app, "cats");
        app.handle_action(Action::Submit);
        app.handle_action(Action::Reset);

        assert_eq!(app.form, FormState::new());
        assert!(app.search_string.is_empty());
        // History survives a form reset
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_copy_without_query() {
        let mut app = App::new(MemoryStore::new());
        app.handle_action(Action::CopyToClipboard);

        assert_eq!(app.status_message.as_ref().map(|m| m.message_type), Some(MessageType::Error));
        assert!(status_text(&app).contains("No search query to copy"));
    }

    #[test]
    fn test_open_without_query() {
        let mut app = App::new(MemoryStore::new());
        app.handle_action(Action::OpenInBrowser);

        assert!(status_text(&app).contains("No search query to open"));
    }

    #[test]
    fn test_selector_cycling_on_form() {
        let mut app = App::new(MemoryStore::new());
        for _ in 0..4 {
            app.handle_action(Action::NextField);
        }
        assert_eq!(app.form.focus, FormField::TermsAppearing);

        app.handle_action(Action::CyclePrev);
        assert_eq!(app.form.criteria.terms_appearing, TermsAppearing::Links);
    }

    #[test]
    fn test_history_dialog_lists_records() {
        let store = MemoryStore::new().with_entry(
            HISTORY_KEY,
            r#"[{"base":"rust"},{"base":"cats","termsAppearing":"title"}]"#,
        );
        let mut app = App::new(store);
        app.handle_action(Action::ToggleHistory);

        assert_eq!(app.screen, Screen::History);
        assert_eq!(app.history_view.total_count(), 2);

        app.handle_action(Action::Back);
        assert_eq!(app.screen, Screen::Form);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_history_autofill() {
        let store = MemoryStore::new().with_entry(
            HISTORY_KEY,
            r#"[{"base":"rust"},{"base":"cats","termsAppearing":"title","fileType":"pdf"}]"#,
        );
        let mut app = App::new(store);
        app.handle_action(Action::ToggleHistory);
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::Submit);

        assert_eq!(app.screen, Screen::Form);
        assert_eq!(app.form.criteria.base, "cats");
        assert_eq!(app.form.criteria.file_type, FileType::Pdf);
        assert_eq!(app.search_string, "allintitle: cats filetype:pdf");
    }

    #[test]
    fn test_history_filter_then_autofill() {
        let store = MemoryStore::new()
            .with_entry(HISTORY_KEY, r#"[{"base":"rust ownership"},{"base":"python"}]"#);
        let mut app = App::new(store);
        app.handle_action(Action::ToggleHistory);
        type_text(&mut app, "pyth");
        app.handle_action(Action::Submit);

        assert_eq!(app.search_string, "python");
    }

    #[test]
    fn test_history_autofill_with_no_entries() {
        let mut app = App::new(MemoryStore::new());
        app.handle_action(Action::ToggleHistory);
        app.handle_action(Action::Submit);

        assert!(status_text(&app).contains("No history entry selected"));
        assert_eq!(app.screen, Screen::Form);
    }

    #[test]
    fn test_clear_history_from_dialog() {
        let store = MemoryStore::new().with_entry(HISTORY_KEY, r#"[{"base":"rust"}]"#);
        let mut app = App::new(store);
        app.handle_action(Action::ToggleHistory);
        app.handle_action(Action::ClearHistory);

        assert!(app.history.is_empty());
        assert_eq!(app.history_view.total_count(), 0);
        assert!(status_text(&app).contains("cleared"));
    }

    #[test]
    fn test_clear_history_ignored_on_form() {
        let store = MemoryStore::new().with_entry(HISTORY_KEY, r#"[{"base":"rust"}]"#);
        let mut app = App::new(store);
        app.handle_action(Action::ClearHistory);

        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_history_copy_without_selection() {
        let mut app = App::new(MemoryStore::new());
        app.handle_action(Action::ToggleHistory);
        app.handle_action(Action::CopyToClipboard);

        assert!(status_text(&app).contains("No search query to copy"));
    }

    #[test]
    fn test_toggle_theme_persists() {
        let mut app = App::new(MemoryStore::new());
        app.handle_action(Action::ToggleTheme);

        assert!(app.dark_theme);
        assert_eq!(app.history.store().get(THEME_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_toggle_theme_with_unavailable_store() {
        let mut app = App::new(MemoryStore::unavailable());
        app.handle_action(Action::ToggleTheme);

        assert!(app.dark_theme);
        assert!(status_text(&app).contains("Theme not saved"));
    }

    #[test]
    fn test_toggle_theme_after_failed_save_follows_screen() {
        let mut app = App::new(MemoryStore::new());

        app.history.store_mut().set_unavailable(true);
        app.handle_action(Action::ToggleTheme);
        assert!(app.dark_theme);

        app.history.store_mut().set_unavailable(false);
        app.handle_action(Action::ToggleTheme);
        assert!(!app.dark_theme);
        assert_eq!(app.history.store().get(THEME_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_status_message_expiry() {
        let mut app = App::new(MemoryStore::new());
        app.status_message = Some(StatusMessage {
            text: "old".to_string(),
            message_type: MessageType::Success,
            expires_at: Instant::now() - Duration::from_millis(1),
        });
        app.needs_redraw = false;

        app.check_and_clear_expired_status();
        assert!(app.status_message.is_none());
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_check_and_clear_expired_status_keeps_active() {
        let mut app = App::new(MemoryStore::new());
        app.success("still here");

        app.check_and_clear_expired_status();
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_error_lasts_longer_than_success() {
        let mut app = App::new(MemoryStore::new());
        app.success("ok");
        let success_expiry = app.status_message.as_ref().unwrap().expires_at;
        app.error("bad");
        let error_expiry = app.status_message.as_ref().unwrap().expires_at;

        assert!(error_expiry > success_expiry);
    }

    #[test]
    fn test_criteria_accessor() {
        let mut app = App::new(MemoryStore::new());
        type_text(&mut app, "dogs");
        assert_eq!(app.criteria(), &SearchCriteria::new("dogs"));
    }
}
