use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus, UiCommand};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    Generate,
    Refine,
    Copy,
    CycleTone,
    CycleAction,
    SwitchFocus,
    FocusDraft,
    Insert(char),
    Newline,
    Backspace,
}

pub fn classify_key(key: KeyEvent, focus: Focus) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' | 'c' => InputAction::Quit,
                'g' => InputAction::Generate,
                'r' => InputAction::Refine,
                'y' => InputAction::Copy,
                't' => InputAction::CycleTone,
                'o' => InputAction::CycleAction,
                _ => InputAction::None,
            },
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => InputAction::SwitchFocus,
        KeyCode::Esc => InputAction::FocusDraft,
        KeyCode::Backspace => InputAction::Backspace,
        // Submitting instructions and asking for them share one trigger.
        KeyCode::Enter if focus == Focus::Instructions => InputAction::Refine,
        KeyCode::Enter => InputAction::Newline,
        KeyCode::Char(ch) => InputAction::Insert(ch),
        _ => InputAction::None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<UiCommand> {
    let action = classify_key(key, app.focus());
    app.apply(action)
}
