//! Two-operand calculator widget
//!
//! Two text inputs, a read-only result field and seven triggers: Add,
//! Subtract, Multiply, Divide, SquareRoot, Power and Reset. Every press reads
//! the current operand text, computes, and writes the result field.
//!
//! The widget core is frontend-neutral. It is mounted in a terminal (feature
//! `tui`) and in a DOM, either the in-process [`wasm::MockDom`] or a real
//! browser page (feature `wasm`).
//!
//! # Example
//!
//! ```rust
//! use calc_widget::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.set_first("16");
//! calc.set_second("0.5");
//!
//! assert_eq!(calc.press(Operation::Power), Outcome::Value(4.0));
//! assert_eq!(calc.result_text(), "4");
//!
//! // Unparsable input resets every field
//! calc.set_first("Garbage input");
//! calc.press(Operation::Add);
//! assert_eq!(calc.first_text(), "Enter First Number");
//! assert_eq!(calc.result_text(), "");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// DOM frontend; the mock DOM needs no browser
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::core::{
        CalcError, CalcResult, Calculator, CalculatorState, ClearReason, OperandSlot, Operation,
        Outcome,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmCalculator, WasmDriver};
}
