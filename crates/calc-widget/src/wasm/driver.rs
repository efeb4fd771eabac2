//! WASM Driver
//!
//! Implements [`CalculatorDriver`] over the mock DOM: every interaction is
//! dispatched as a DOM event, and after each one the `value` attributes are
//! written back from the widget so the markup always mirrors its state.

use super::calculator::WasmCalculator;
use super::dom::{button_id, DomEvent, MockDom};
use crate::config::CalculatorConfig;
use crate::core::{OperandSlot, Operation, RESULT_FIELD_NAME};
use crate::driver::CalculatorDriver;

/// WASM Driver wrapping calculator and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    calculator: WasmCalculator,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a new WASM driver
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: WasmCalculator::new(),
            dom: MockDom::calculator(),
        }
    }

    /// Creates a WASM driver whose widget and markup follow a configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            calculator: WasmCalculator::with_config(config),
            dom: MockDom::calculator_with(config),
        }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Dispatches an event to the DOM and the widget, then syncs values
    pub fn dispatch(&mut self, event: DomEvent) {
        self.calculator.handle_event(&event);
        self.dom.dispatch_event(&event);
        self.sync_dom();
    }

    /// Simulates a click on an element id
    pub fn click(&mut self, element_id: &str) {
        self.dispatch(DomEvent::click(element_id));
    }

    /// Value attribute of a named input as the markup shows it
    #[must_use]
    pub fn dom_value(&self, name: &str) -> Option<&str> {
        self.dom.value_of(name)
    }

    fn sync_dom(&mut self) {
        for slot in OperandSlot::ALL {
            let text = self.calculator.calculator().operand_text(slot);
            self.dom.set_value(slot.field_name(), text);
        }
        let result = self.calculator.calculator().result_text();
        self.dom.set_value(RESULT_FIELD_NAME, result);
    }
}

impl CalculatorDriver for WasmDriver {
    fn change_first(&mut self, text: &str) {
        self.dispatch(DomEvent::change(OperandSlot::First.field_name(), text));
    }

    fn change_second(&mut self, text: &str) {
        self.dispatch(DomEvent::change(OperandSlot::Second.field_name(), text));
    }

    fn force_result(&mut self, text: &str) {
        self.calculator.calculator_mut().force_result(text);
        self.sync_dom();
    }

    fn press(&mut self, op: Operation) {
        self.click(&button_id(op));
    }

    fn first_value(&self) -> String {
        self.dom_value(OperandSlot::First.field_name())
            .unwrap_or_default()
            .to_string()
    }

    fn second_value(&self) -> String {
        self.dom_value(OperandSlot::Second.field_name())
            .unwrap_or_default()
            .to_string()
    }

    fn result_value(&self) -> String {
        self.dom_value(RESULT_FIELD_NAME)
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{
        run_all_checks, verify_basic_arithmetic, verify_divide_by_zero,
        verify_invalid_input_resets, verify_power, verify_reset, verify_square_root,
    };

    // ===== Constructor tests =====

    #[test]
    fn test_wasm_driver_new() {
        let driver = WasmDriver::new();
        assert!(driver.first_value().is_empty());
        assert!(driver.second_value().is_empty());
        assert!(driver.result_value().is_empty());
    }

    #[test]
    fn test_wasm_driver_default() {
        let driver = WasmDriver::default();
        assert_eq!(driver.dom().query_all("button").len(), 7);
    }

    #[test]
    fn test_wasm_driver_with_config() {
        let config = CalculatorConfig::new().with_placeholders("A", "B");
        let mut driver = WasmDriver::with_config(&config);
        driver.press(Operation::Reset);
        assert_eq!(driver.first_value(), "A");
        assert_eq!(driver.second_value(), "B");
        assert_eq!(
            driver
                .dom()
                .find_by_name("firstNumberInput")
                .unwrap()
                .get_attr("placeholder"),
            Some("A")
        );
    }

    // ===== DOM sync tests =====

    #[test]
    fn test_change_writes_value_attribute() {
        let mut driver = WasmDriver::new();
        driver.change_first("15");
        assert_eq!(driver.dom_value("firstNumberInput"), Some("15"));
        assert_eq!(driver.calculator().calculator().first_text(), "15");
    }

    #[test]
    fn test_press_writes_result_attribute() {
        let mut driver = WasmDriver::new();
        driver.calculate("15", "10", Operation::Add);
        assert_eq!(driver.dom_value("resultInput"), Some("25"));
    }

    #[test]
    fn test_events_sync_every_field() {
        let mut driver = WasmDriver::new();
        driver.dispatch(DomEvent::change("firstNumberInput", "2"));
        assert_eq!(driver.dom_value("firstNumberInput"), Some("2"));
        driver.dispatch(DomEvent::change("secondNumberInput", "3"));
        driver.click("btn-power");
        assert_eq!(driver.dom_value("firstNumberInput"), Some("2"));
        assert_eq!(driver.dom_value("secondNumberInput"), Some("3"));
        assert_eq!(driver.dom_value("resultInput"), Some("8"));
    }

    #[test]
    fn test_editing_result_is_overwritten_by_sync() {
        let mut driver = WasmDriver::new();
        driver.calculate("1", "1", Operation::Add);
        driver.dispatch(DomEvent::change("resultInput", "hacked"));
        assert_eq!(driver.result_value(), "2");
    }

    #[test]
    fn test_click_non_button_is_ignored() {
        let mut driver = WasmDriver::new();
        driver.change_first("4");
        driver.click("calculator");
        assert_eq!(driver.first_value(), "4");
        assert!(driver.result_value().is_empty());
    }

    #[test]
    fn test_force_result_syncs() {
        let mut driver = WasmDriver::new();
        driver.force_result("10");
        assert_eq!(driver.dom_value("resultInput"), Some("10"));
    }

    // ===== Shared check tests =====

    #[test]
    fn test_unified_basic_arithmetic() {
        verify_basic_arithmetic(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_divide_by_zero() {
        verify_divide_by_zero(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_square_root() {
        verify_square_root(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_power() {
        verify_power(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_reset() {
        verify_reset(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_invalid_input() {
        verify_invalid_input_resets(&mut WasmDriver::new());
    }

    #[test]
    fn test_all_checks() {
        run_all_checks(&mut WasmDriver::new());
    }
}
