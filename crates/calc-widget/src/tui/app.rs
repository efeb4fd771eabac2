//! TUI Application State
//!
//! Keyboard focus moves across the two operand inputs and the seven
//! trigger buttons. Editing goes through the widget core so the terminal
//! and the DOM frontends share one set of rules.

use crate::config::CalculatorConfig;
use crate::core::{Calculator, CalculatorState, OperandSlot, Operation, Outcome};

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// One of the operand inputs
    Operand(OperandSlot),
    /// One of the trigger buttons
    Button(Operation),
}

impl Focus {
    /// Tab order: both inputs, then the buttons in trigger order
    pub const ORDER: [Self; 9] = [
        Self::Operand(OperandSlot::First),
        Self::Operand(OperandSlot::Second),
        Self::Button(Operation::Add),
        Self::Button(Operation::Subtract),
        Self::Button(Operation::Multiply),
        Self::Button(Operation::Divide),
        Self::Button(Operation::SquareRoot),
        Self::Button(Operation::Power),
        Self::Button(Operation::Reset),
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The widget itself
    calculator: Calculator,
    /// Current keyboard focus
    focus: Focus,
    /// Cursor (in characters) for each operand input
    cursors: [usize; 2],
    /// Button highlighted by the most recent press
    last_pressed: Option<Operation>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }

    /// Creates a calculator app from a configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self::with_calculator(Calculator::with_config(config))
    }

    fn with_calculator(calculator: Calculator) -> Self {
        Self {
            calculator,
            focus: Focus::Operand(OperandSlot::First),
            cursors: [0; 2],
            last_pressed: None,
            should_quit: false,
        }
    }

    /// Returns the widget
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the widget mutably
    pub fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }

    /// Returns the current focus
    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the operand slot with focus, if an input is focused
    #[must_use]
    pub fn focused_operand(&self) -> Option<OperandSlot> {
        match self.focus {
            Focus::Operand(slot) => Some(slot),
            Focus::Button(_) => None,
        }
    }

    /// Returns the cursor position (in characters) within an operand
    #[must_use]
    pub fn cursor(&self, slot: OperandSlot) -> usize {
        self.cursors[slot_index(slot)]
    }

    /// Returns the button highlighted by the last press
    #[must_use]
    pub fn last_pressed(&self) -> Option<Operation> {
        self.last_pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Focuses an operand input, cursor at the end
    pub fn focus_operand(&mut self, slot: OperandSlot) {
        self.focus = Focus::Operand(slot);
        self.move_cursor_end();
    }

    /// Focuses a trigger button
    pub fn focus_button(&mut self, op: Operation) {
        self.focus = Focus::Button(op);
    }

    /// Moves focus forward in tab order
    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % Focus::ORDER.len();
        self.set_focus(Focus::ORDER[next]);
    }

    /// Moves focus backward in tab order
    pub fn focus_prev(&mut self) {
        let len = Focus::ORDER.len();
        let prev = (self.focus.index() + len - 1) % len;
        self.set_focus(Focus::ORDER[prev]);
    }

    fn set_focus(&mut self, focus: Focus) {
        match focus {
            Focus::Operand(slot) => self.focus_operand(slot),
            Focus::Button(op) => self.focus_button(op),
        }
    }

    /// Inserts a character at the cursor of the focused input
    pub fn insert_char(&mut self, c: char) {
        self.edit_focused(|text, cursor| {
            let at = byte_offset(text, cursor);
            text.insert(at, c);
            cursor + 1
        });
    }

    /// Deletes the character before the cursor (backspace)
    pub fn delete_char(&mut self) {
        self.edit_focused(|text, cursor| {
            if cursor == 0 {
                return 0;
            }
            let at = byte_offset(text, cursor - 1);
            text.remove(at);
            cursor - 1
        });
    }

    /// Deletes the character at the cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        self.edit_focused(|text, cursor| {
            if cursor < text.chars().count() {
                let at = byte_offset(text, cursor);
                text.remove(at);
            }
            cursor
        });
    }

    /// Empties the focused input
    pub fn clear_focused(&mut self) {
        self.edit_focused(|text, _| {
            text.clear();
            0
        });
    }

    /// Moves the cursor left
    pub fn move_cursor_left(&mut self) {
        if let Some(slot) = self.focused_operand() {
            let cursor = &mut self.cursors[slot_index(slot)];
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Moves the cursor right
    pub fn move_cursor_right(&mut self) {
        if let Some(slot) = self.focused_operand() {
            let len = self.text_len(slot);
            let cursor = &mut self.cursors[slot_index(slot)];
            if *cursor < len {
                *cursor += 1;
            }
        }
    }

    /// Moves cursor to the beginning of the input
    pub fn move_cursor_start(&mut self) {
        if let Some(slot) = self.focused_operand() {
            self.cursors[slot_index(slot)] = 0;
        }
    }

    /// Moves cursor to the end of the input
    pub fn move_cursor_end(&mut self) {
        if let Some(slot) = self.focused_operand() {
            self.cursors[slot_index(slot)] = self.text_len(slot);
        }
    }

    /// Activates whatever has focus.
    ///
    /// On a button this presses it; on an input it moves to the next stop.
    pub fn activate(&mut self) -> Option<Outcome> {
        match self.focus {
            Focus::Button(op) => Some(self.trigger(op)),
            Focus::Operand(_) => {
                self.focus_next();
                None
            }
        }
    }

    /// Presses a trigger regardless of focus
    pub fn trigger(&mut self, op: Operation) -> Outcome {
        let outcome = self.calculator.press(op);
        self.last_pressed = Some(op);
        for slot in OperandSlot::ALL {
            self.cursors[slot_index(slot)] = self.text_len(slot);
        }
        outcome
    }

    /// Status line describing the widget state
    #[must_use]
    pub fn status(&self) -> String {
        let state = match self.calculator.state() {
            CalculatorState::Idle => "Ready",
            CalculatorState::Editing => "Editing",
            CalculatorState::Result => "Result",
            CalculatorState::Error => "Error",
        };
        match self.last_pressed {
            Some(op) => format!("{state} (last: {} {})", op.symbol(), op.label()),
            None => state.to_string(),
        }
    }

    fn text_len(&self, slot: OperandSlot) -> usize {
        self.calculator.operand_text(slot).chars().count()
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String, usize) -> usize) {
        let Some(slot) = self.focused_operand() else {
            return;
        };
        let mut text = self.calculator.operand_text(slot).to_string();
        let cursor = self.cursor(slot).min(text.chars().count());
        let cursor = edit(&mut text, cursor);
        self.calculator.set_operand(slot, &text);
        self.cursors[slot_index(slot)] = cursor;
    }
}

const fn slot_index(slot: OperandSlot) -> usize {
    match slot {
        OperandSlot::First => 0,
        OperandSlot::Second => 1,
    }
}

/// Byte offset of the `chars`-th character
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}
