//! TUI rendering
//!
//! Two operand inputs, the read-only result field, the trigger buttons and a
//! help sidebar. The layout is exposed so mouse clicks can be hit-tested
//! against the same rectangles that were drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::{CalculatorApp, Focus};
use super::buttons::{ButtonBar, ButtonBarWidget};
use crate::core::{CalculatorState, OperandSlot};

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// First operand input
    pub first: Rect,
    /// Second operand input
    pub second: Rect,
    /// Read-only result field
    pub result: Rect,
    /// Trigger buttons
    pub buttons: Rect,
    /// Status line
    pub status: Rect,
    /// Help sidebar
    pub help: Rect,
}

impl UiLayout {
    /// Splits the full terminal area into calculator regions
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Min(40), Constraint::Length(24)])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // First operand
                Constraint::Length(3), // Second operand
                Constraint::Length(3), // Result
                Constraint::Length(6), // Buttons
                Constraint::Min(1),    // Status
            ])
            .split(columns[0]);

        Self {
            first: rows[0],
            second: rows[1],
            result: rows[2],
            buttons: rows[3],
            status: rows[4],
            help: columns[1],
        }
    }

    /// Area of an operand input
    #[must_use]
    pub fn operand(&self, slot: OperandSlot) -> Rect {
        match slot {
            OperandSlot::First => self.first,
            OperandSlot::Second => self.second,
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    buttons: ButtonBar,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        let mut buttons = ButtonBar::new();
        buttons.set_pressed(app.last_pressed());
        buttons.set_focused(match app.focus() {
            Focus::Button(op) => Some(op),
            Focus::Operand(_) => None,
        });
        Self { app, buttons }
    }

    fn render_operand(&self, slot: OperandSlot, area: Rect, buf: &mut Buffer) {
        let field = self.app.calculator().field(slot);
        let focused = self.app.focused_operand() == Some(slot);

        let line = if field.text().is_empty() && !focused {
            Line::from(Span::styled(
                field.placeholder(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else if focused {
            cursor_line(field.text(), self.app.cursor(slot))
        } else {
            Line::from(field.text())
        };

        let title = match slot {
            OperandSlot::First => " First Number ",
            OperandSlot::Second => " Second Number ",
        };
        let border = if focused { Color::Yellow } else { Color::Cyan };

        Paragraph::new(line)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .render(area, buf);
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let calculator = self.app.calculator();
        let style = if calculator.state() == CalculatorState::Error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(calculator.result_text(), style))
            .block(
                Block::default()
                    .title(" Result (read-only) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.status(),
            Style::default().fg(Color::Gray),
        ))
        .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = UiLayout::new(area);
        for slot in OperandSlot::ALL {
            self.render_operand(slot, layout.operand(slot), buf);
        }
        self.render_result(layout.result, buf);
        ButtonBarWidget::new(&self.buttons).render(layout.buttons, buf);
        self.render_status(layout.status, buf);
        self.render_help(layout.help, buf);
    }
}

/// Builds a line with the character under the cursor highlighted
fn cursor_line(text: &str, cursor: usize) -> Line<'_> {
    let split = text
        .char_indices()
        .nth(cursor)
        .map_or(text.len(), |(offset, _)| offset);
    let (before, after) = text.split_at(split);
    let mut rest = after.chars();
    let under = rest.next().unwrap_or(' ');

    Line::from(vec![
        Span::raw(before),
        Span::styled(
            under.to_string(),
            Style::default().bg(Color::White).fg(Color::Black),
        ),
        Span::raw(rest.as_str()),
    ])
}

/// Window title
pub const TITLE: &str = " Two-Operand Calculator ";

/// Keyboard shortcuts shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Tab", "Next field"),
    ("S-Tab", "Prev field"),
    ("Enter", "Press/next"),
    ("F1-F7", "Operations"),
    ("Esc", "Reset"),
    ("Ctrl+U", "Clear field"),
    ("Ctrl+C", "Quit"),
];
