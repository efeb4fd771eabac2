//! Unified Calculator Driver
//!
//! Write the behavioural checks once and run them against every frontend.
//! Triggers are addressed by [`Operation`], so a check never depends on
//! where a button happens to sit.

use crate::core::Operation;

/// Abstract driver trait for widget interactions
///
/// # Example
///
/// ```rust
/// use calc_widget::prelude::*;
///
/// fn add_twice<D: CalculatorDriver>(driver: &mut D) -> String {
///     driver.change_first("2");
///     driver.change_second("2");
///     driver.press(Operation::Add);
///     driver.result_value()
/// }
///
/// let mut driver = WasmDriver::new();
/// assert_eq!(add_twice(&mut driver), "4");
/// ```
pub trait CalculatorDriver {
    /// Replaces the text of the first operand input
    fn change_first(&mut self, text: &str);

    /// Replaces the text of the second operand input
    fn change_second(&mut self, text: &str);

    /// Writes straight into the read-only result field
    fn force_result(&mut self, text: &str);

    /// Activates the trigger for an operation
    fn press(&mut self, op: Operation);

    /// Current value of the first operand input
    fn first_value(&self) -> String;

    /// Current value of the second operand input
    fn second_value(&self) -> String;

    /// Current value of the result field
    fn result_value(&self) -> String;

    /// Enters both operands and presses `op`, returning the result value
    fn calculate(&mut self, first: &str, second: &str, op: Operation) -> String {
        self.change_first(first);
        self.change_second(second);
        self.press(op);
        self.result_value()
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::{OperandSlot, Operation};
    use crate::tui::CalculatorApp;

    /// Drives the terminal app through its editing and focus operations
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }

        fn type_into(&mut self, slot: OperandSlot, text: &str) {
            self.app.focus_operand(slot);
            self.app.clear_focused();
            for c in text.chars() {
                self.app.insert_char(c);
            }
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn change_first(&mut self, text: &str) {
            self.type_into(OperandSlot::First, text);
        }

        fn change_second(&mut self, text: &str) {
            self.type_into(OperandSlot::Second, text);
        }

        fn force_result(&mut self, text: &str) {
            self.app.calculator_mut().force_result(text);
        }

        fn press(&mut self, op: Operation) {
            self.app.focus_button(op);
            self.app.activate();
        }

        fn first_value(&self) -> String {
            self.app.calculator().first_text().to_string()
        }

        fn second_value(&self) -> String {
            self.app.calculator().second_text().to_string()
        }

        fn result_value(&self) -> String {
            self.app.calculator().result_text().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behaviour checks =====
// These work with ANY CalculatorDriver implementation

/// Asserts the driver is in the reset state
pub fn assert_reset_state<D: CalculatorDriver>(driver: &D) {
    assert_eq!(driver.first_value(), "Enter First Number");
    assert_eq!(driver.second_value(), "Enter Second Number");
    assert_eq!(driver.result_value(), "");
}

/// Verifies the four basic operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(driver.calculate("15", "10", Operation::Add), "25");
    assert_eq!(driver.calculate("15", "10", Operation::Subtract), "5");
    assert_eq!(driver.calculate("15", "10", Operation::Multiply), "150");
    assert_eq!(driver.calculate("50", "10", Operation::Divide), "5");
}

/// Verifies the divide-by-zero message and that operands survive it
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(
        driver.calculate("50", "0", Operation::Divide),
        "Cannot Divide by Zero"
    );
    assert_eq!(driver.first_value(), "50");
    assert_eq!(driver.second_value(), "0");
}

/// Verifies square root, including that it never reads the second operand
pub fn verify_square_root<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(driver.calculate("16", "0", Operation::SquareRoot), "4");
    assert_eq!(driver.calculate("16", "3", Operation::SquareRoot), "4");
    assert_eq!(
        driver.calculate("25", "int.MaxValue", Operation::SquareRoot),
        "5"
    );
    assert_eq!(driver.calculate("0", "", Operation::SquareRoot), "0");
    assert_eq!(driver.calculate("-16", "0", Operation::SquareRoot), "NaN");
}

/// Verifies power
pub fn verify_power<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(driver.calculate("16", "0.5", Operation::Power), "4");
    assert_eq!(driver.calculate("2", "10", Operation::Power), "1024");
}

/// Verifies reset overwrites a forced result and is idempotent
pub fn verify_reset<D: CalculatorDriver>(driver: &mut D) {
    driver.change_first("5");
    driver.change_second("5");
    driver.force_result("10");
    driver.press(Operation::Reset);
    assert_reset_state(driver);

    driver.press(Operation::Reset);
    assert_reset_state(driver);
}

/// Verifies that garbage input behaves like Reset for every trigger
pub fn verify_invalid_input_resets<D: CalculatorDriver>(driver: &mut D) {
    for op in Operation::ALL {
        driver.change_first("Garbage input");
        driver.change_second("super duper ultra garbage input");
        driver.press(op);
        assert_reset_state(driver);
    }
}

/// Runs every shared check in turn
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_divide_by_zero(driver);
    verify_square_root(driver);
    verify_power(driver);
    verify_reset(driver);
    verify_invalid_input_resets(driver);
}
