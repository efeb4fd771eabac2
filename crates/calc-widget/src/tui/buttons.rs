//! Trigger button bar for the TUI calculator
//!
//! Seven buttons laid out in a grid, clickable with the mouse and
//! highlighted for focus and for the most recent press.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Operation;

/// A single trigger button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerButton {
    /// The operation this button fires
    pub operation: Operation,
    /// Highlighted as the most recent press
    pub pressed: bool,
    /// Holds keyboard focus
    pub focused: bool,
}

impl TriggerButton {
    /// Creates an idle button
    #[must_use]
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            pressed: false,
            focused: false,
        }
    }

    /// Text drawn for the button
    #[must_use]
    pub fn caption(&self) -> String {
        format!("[{}]", self.operation.label())
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        let base = match self.operation {
            Operation::Reset => Style::default().fg(Color::Red),
            Operation::SquareRoot | Operation::Power => Style::default().fg(Color::Cyan),
            _ => Style::default().fg(Color::Yellow),
        };
        if self.focused {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

/// The button layout, in trigger order:
/// ```text
/// [Add] [Subtract] [Multiply] [Divide]
/// [Sqrt] [Power] [Reset]
/// ```
#[derive(Debug, Clone)]
pub struct ButtonBar {
    buttons: Vec<TriggerButton>,
    cols: usize,
}

impl Default for ButtonBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonBar {
    /// Number of buttons per row
    pub const COLUMNS: usize = 4;

    /// Creates the bar with every trigger in order
    #[must_use]
    pub fn new() -> Self {
        Self {
            buttons: Operation::ALL.into_iter().map(TriggerButton::new).collect(),
            cols: Self::COLUMNS,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.buttons.len().div_ceil(self.cols), self.cols)
    }

    /// Gets the button for an operation
    #[must_use]
    pub fn get(&self, op: Operation) -> Option<&TriggerButton> {
        self.buttons.iter().find(|b| b.operation == op)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &TriggerButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &TriggerButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(move |(i, btn)| ((i / self.cols, i % self.cols), btn))
    }

    /// Highlights one button as pressed, releasing the rest
    pub fn set_pressed(&mut self, op: Option<Operation>) {
        for btn in &mut self.buttons {
            btn.pressed = Some(btn.operation) == op;
        }
    }

    /// Marks the focused button
    pub fn set_focused(&mut self, op: Option<Operation>) {
        for btn in &mut self.buttons {
            btn.focused = Some(btn.operation) == op;
        }
    }

    /// Converts a click position to the operation under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Operation> {
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (rows, cols) = self.dimensions();
        let btn_width = (area.width - 2) / cols as u16;
        let btn_height = (area.height - 2) / rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        if row < rows && col < cols {
            self.buttons.get(row * cols + col).map(|b| b.operation)
        } else {
            None
        }
    }
}

/// Button bar widget for rendering
#[derive(Debug)]
pub struct ButtonBarWidget<'a> {
    bar: &'a ButtonBar,
}

impl<'a> ButtonBarWidget<'a> {
    /// Creates a new button bar widget
    #[must_use]
    pub fn new(bar: &'a ButtonBar) -> Self {
        Self { bar }
    }
}

impl Widget for ButtonBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Operations ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.bar.dimensions();
        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return;
        }

        for ((row, col), btn) in self.bar.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height) + btn_height / 2;
            let caption = btn.caption();
            let caption_x = x + btn_width.saturating_sub(caption.len() as u16) / 2;
            buf.set_span(caption_x, y, &Span::styled(caption, btn.style()), btn_width);
        }
    }
}
