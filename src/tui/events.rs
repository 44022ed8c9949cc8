use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Back,
    NextField,
    PrevField,
    MoveUp,
    MoveDown,
    CycleNext,
    CyclePrev,
    Submit,
    Reset,
    CopyToClipboard,
    OpenInBrowser,
    ToggleHistory,
    ToggleTheme,
    ClearHistory,
    Input(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Back,

        // Focus and selection
        (KeyCode::Tab, _) => Action::NextField,
        (KeyCode::BackTab, _) => Action::PrevField,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::Right, _) => Action::CycleNext,
        (KeyCode::Left, _) => Action::CyclePrev,

        // Actions
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Reset,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyToClipboard,
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => Action::OpenInBrowser,
        // Some terminals send Ctrl+H as backspace, F2 always works
        (KeyCode::Char('h'), KeyModifiers::CONTROL) | (KeyCode::F(2), _) => Action::ToggleHistory,
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::ToggleTheme,
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => Action::ClearHistory,

        // Text input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
