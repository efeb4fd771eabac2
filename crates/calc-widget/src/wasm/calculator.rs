//! DOM-facing calculator
//!
//! Translates DOM events (value edits addressed by input `name`, clicks
//! addressed by button id) into widget operations.

use tracing::{debug, warn};

use super::dom::{operation_for_button, DomEvent};
use crate::config::CalculatorConfig;
use crate::core::{Calculator, OperandSlot, Operation, Outcome, RESULT_FIELD_NAME};

/// Calculator wired to DOM names and ids
#[derive(Debug, Default)]
pub struct WasmCalculator {
    calculator: Calculator,
}

impl WasmCalculator {
    /// Creates a new calculator with default prompts and messages
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Creates a calculator from a configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
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

    /// Applies a value edit to the input with the given `name`.
    ///
    /// Returns false for the read-only result field and unknown names.
    pub fn change_input(&mut self, name: &str, value: &str) -> bool {
        match OperandSlot::from_field_name(name) {
            Some(slot) => {
                self.calculator.set_operand(slot, value);
                true
            }
            None if name == RESULT_FIELD_NAME => {
                warn!(field = name, "ignoring edit of read-only result field");
                false
            }
            None => {
                debug!(field = name, "change on unknown input");
                false
            }
        }
    }

    /// Handles a click on a button id such as `btn-divide`
    pub fn click(&mut self, element_id: &str) -> Option<Outcome> {
        let op = operation_for_button(element_id)?;
        Some(self.press(op))
    }

    /// Presses a trigger
    pub fn press(&mut self, op: Operation) -> Outcome {
        self.calculator.press(op)
    }

    /// Routes a DOM event to the widget
    pub fn handle_event(&mut self, event: &DomEvent) -> Option<Outcome> {
        match event {
            DomEvent::Change { name, value } => {
                self.change_input(name, value);
                None
            }
            DomEvent::Click { element_id } => self.click(element_id),
        }
    }

    /// Current value for an input `name`, including the result field
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        if name == RESULT_FIELD_NAME {
            return Some(self.calculator.result_text());
        }
        OperandSlot::from_field_name(name).map(|slot| self.calculator.operand_text(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, ClearReason};

    // ===== Constructor tests =====

    #[test]
    fn test_wasm_calculator_new() {
        let calc = WasmCalculator::new();
        assert_eq!(calc.value_of("firstNumberInput"), Some(""));
        assert_eq!(calc.value_of("resultInput"), Some(""));
        assert_eq!(calc.value_of("other"), None);
    }

    #[test]
    fn test_wasm_calculator_with_config() {
        let config = CalculatorConfig::new().with_divide_by_zero_message("∞?");
        let mut calc = WasmCalculator::with_config(&config);
        calc.change_input("firstNumberInput", "1");
        calc.change_input("secondNumberInput", "0");
        calc.click("btn-divide");
        assert_eq!(calc.value_of("resultInput"), Some("∞?"));
    }

    // ===== Change tests =====

    #[test]
    fn test_change_operands() {
        let mut calc = WasmCalculator::new();
        assert!(calc.change_input("firstNumberInput", "15"));
        assert!(calc.change_input("secondNumberInput", "10"));
        assert_eq!(calc.calculator().first_text(), "15");
        assert_eq!(calc.calculator().second_text(), "10");
    }

    #[test]
    fn test_change_result_is_refused() {
        let mut calc = WasmCalculator::new();
        assert!(!calc.change_input("resultInput", "99"));
        assert_eq!(calc.calculator().result_text(), "");
    }

    #[test]
    fn test_change_unknown_name() {
        let mut calc = WasmCalculator::new();
        assert!(!calc.change_input("thirdNumberInput", "1"));
    }

    // ===== Click tests =====

    #[test]
    fn test_click_each_button() {
        let mut calc = WasmCalculator::new();
        calc.change_input("firstNumberInput", "16");
        calc.change_input("secondNumberInput", "2");
        assert_eq!(calc.click("btn-add"), Some(Outcome::Value(18.0)));
        assert_eq!(calc.click("btn-subtract"), Some(Outcome::Value(14.0)));
        assert_eq!(calc.click("btn-multiply"), Some(Outcome::Value(32.0)));
        assert_eq!(calc.click("btn-divide"), Some(Outcome::Value(8.0)));
        assert_eq!(calc.click("btn-square-root"), Some(Outcome::Value(4.0)));
        assert_eq!(calc.click("btn-power"), Some(Outcome::Value(256.0)));
        assert_eq!(
            calc.click("btn-reset"),
            Some(Outcome::Cleared(ClearReason::Requested))
        );
    }

    #[test]
    fn test_click_unknown_button() {
        let mut calc = WasmCalculator::new();
        assert_eq!(calc.click("btn-equals"), None);
        assert_eq!(calc.click("calculator"), None);
    }

    // ===== Event routing tests =====

    #[test]
    fn test_handle_events() {
        let mut calc = WasmCalculator::new();
        assert_eq!(
            calc.handle_event(&DomEvent::change("firstNumberInput", "50")),
            None
        );
        calc.handle_event(&DomEvent::change("secondNumberInput", "0"));
        let outcome = calc.handle_event(&DomEvent::click("btn-divide"));
        assert_eq!(outcome, Some(Outcome::Failed(CalcError::DivideByZero)));
        assert_eq!(calc.value_of("resultInput"), Some("Cannot Divide by Zero"));
    }

    #[test]
    fn test_press_garbage_resets() {
        let mut calc = WasmCalculator::new();
        calc.change_input("firstNumberInput", "Garbage input");
        let outcome = calc.press(Operation::Add);
        assert!(matches!(
            outcome,
            Outcome::Cleared(ClearReason::InvalidInput(_))
        ));
        assert_eq!(calc.value_of("firstNumberInput"), Some("Enter First Number"));
    }

    #[test]
    fn test_calculator_mut_access() {
        let mut calc = WasmCalculator::new();
        calc.calculator_mut().force_result("10");
        assert_eq!(calc.value_of("resultInput"), Some("10"));
    }
}
