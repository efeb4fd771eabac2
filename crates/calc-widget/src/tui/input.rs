//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Operation;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character into the focused input
    InsertChar(char),
    /// Delete character before cursor (backspace)
    Backspace,
    /// Delete character at cursor
    Delete,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Move cursor to start
    CursorHome,
    /// Move cursor to end
    CursorEnd,
    /// Empty the focused input
    ClearField,
    /// Move focus to the next stop
    FocusNext,
    /// Move focus to the previous stop
    FocusPrev,
    /// Activate the focused element
    Activate,
    /// Press a trigger directly
    Trigger(Operation),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('a') => KeyAction::CursorHome,
                KeyCode::Char('e') => KeyAction::CursorEnd,
                KeyCode::Char('u') => KeyAction::ClearField,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => KeyAction::InsertChar(c),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Delete => KeyAction::Delete,
            KeyCode::Left => KeyAction::CursorLeft,
            KeyCode::Right => KeyAction::CursorRight,
            KeyCode::Home => KeyAction::CursorHome,
            KeyCode::End => KeyAction::CursorEnd,
            KeyCode::Tab | KeyCode::Down => KeyAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrev,
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::Esc => KeyAction::Trigger(Operation::Reset),
            KeyCode::F(n) => Self::function_key(n),
            _ => KeyAction::None,
        }
    }

    /// F1..F7 map onto the triggers in order
    fn function_key(n: u8) -> KeyAction {
        usize::from(n)
            .checked_sub(1)
            .and_then(Operation::from_position)
            .map_or(KeyAction::None, KeyAction::Trigger)
    }
}
