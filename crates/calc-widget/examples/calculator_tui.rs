//! Calculator TUI Example
//!
//! Run with: cargo run --example calculator_tui -- [config.json|config.yaml]
//!
//! Logs go to `calc-widget.log` in the working directory; set `RUST_LOG`
//! to override the configured filter.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use calc_widget::config::CalculatorConfig;
use calc_widget::core::OperandSlot;
use calc_widget::tui::{render, ButtonBar, CalculatorApp, InputHandler, KeyAction, UiLayout};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "calc-widget.log";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };
    init_logging(&config)?;
    info!("starting calculator TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, CalculatorApp::with_config(&config));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    info!("calculator TUI stopped");
    Ok(())
}

fn init_logging(config: &CalculatorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(File::create(LOG_FILE)?))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Handle a single key action and return whether to quit
fn handle_action(app: &mut CalculatorApp, action: KeyAction) -> bool {
    match action {
        KeyAction::InsertChar(c) => app.insert_char(c),
        KeyAction::Backspace => app.delete_char(),
        KeyAction::Delete => app.delete_char_forward(),
        KeyAction::CursorLeft => app.move_cursor_left(),
        KeyAction::CursorRight => app.move_cursor_right(),
        KeyAction::CursorHome => app.move_cursor_start(),
        KeyAction::CursorEnd => app.move_cursor_end(),
        KeyAction::ClearField => app.clear_focused(),
        KeyAction::FocusNext => app.focus_next(),
        KeyAction::FocusPrev => app.focus_prev(),
        KeyAction::Activate => {
            app.activate();
        }
        KeyAction::Trigger(op) => {
            app.trigger(op);
        }
        KeyAction::Quit => return true,
        KeyAction::None => {}
    }
    false
}

/// Clicks focus an input or press the button under the pointer
fn handle_mouse(app: &mut CalculatorApp, area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let layout = UiLayout::new(area);
    let (x, y) = (mouse.column, mouse.row);

    if let Some(op) = ButtonBar::new().hit_test(layout.buttons, x, y) {
        app.focus_button(op);
        app.trigger(op);
        return;
    }
    for slot in OperandSlot::ALL {
        let field = layout.operand(slot);
        if x >= field.x && x < field.right() && y >= field.y && y < field.bottom() {
            app.focus_operand(slot);
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> Result<(), Box<dyn std::error::Error>> {
    let input_handler = InputHandler::new();
    let mut area = Rect::default();

    loop {
        terminal.draw(|f| {
            area = f.area();
            render(&app, f);
        })?;

        match event::read()? {
            Event::Key(key) => {
                if handle_action(&mut app, input_handler.handle_key(key)) {
                    app.quit();
                }
            }
            Event::Mouse(mouse) => handle_mouse(&mut app, area, mouse),
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
