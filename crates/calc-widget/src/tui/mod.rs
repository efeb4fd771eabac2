//! Terminal frontend for the calculator widget

mod app;
mod buttons;
mod input;
mod ui;

pub use app::{CalculatorApp, Focus};
pub use buttons::{ButtonBar, ButtonBarWidget, TriggerButton};
pub use input::{InputHandler, KeyAction};
pub use ui::{render, CalculatorUI, UiLayout};
