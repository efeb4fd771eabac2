//! DOM frontend for the calculator widget
//!
//! The mock DOM and its driver run everywhere; the wasm-bindgen surface is
//! only built with the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::{markup, BrowserCalculator};
pub use calculator::WasmCalculator;
pub use dom::{button_id, operation_for_button, DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
