//! Browser bindings for the calculator widget
//!
//! Exposes the widget through wasm-bindgen. The page renders [`markup`] and
//! forwards `change` and `click` events to a [`BrowserCalculator`].

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::calculator::WasmCalculator;
use super::dom::MockDom;
use crate::config::CalculatorConfig;
use crate::core::{OperandSlot, Operation, RESULT_FIELD_NAME};

/// Browser calculator, the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: WasmCalculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a calculator with default prompts and messages
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            inner: WasmCalculator::new(),
        }
    }

    /// Create a calculator from a JSON configuration
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<BrowserCalculator, JsError> {
        console_error_panic_hook::set_once();
        let config = CalculatorConfig::from_json_str(json)?;
        Ok(Self {
            inner: WasmCalculator::with_config(&config),
        })
    }

    /// Current text of the first operand
    #[wasm_bindgen(getter = firstNumber)]
    pub fn first_number(&self) -> String {
        self.inner.calculator().first_text().to_string()
    }

    /// Replace the text of the first operand
    #[wasm_bindgen(setter = firstNumber)]
    pub fn set_first_number(&mut self, value: String) {
        self.inner.change_input(OperandSlot::First.field_name(), &value);
    }

    /// Current text of the second operand
    #[wasm_bindgen(getter = secondNumber)]
    pub fn second_number(&self) -> String {
        self.inner.calculator().second_text().to_string()
    }

    /// Replace the text of the second operand
    #[wasm_bindgen(setter = secondNumber)]
    pub fn set_second_number(&mut self, value: String) {
        self.inner.change_input(OperandSlot::Second.field_name(), &value);
    }

    /// Current text of the result field
    #[wasm_bindgen(getter)]
    pub fn result(&self) -> String {
        self.inner.calculator().result_text().to_string()
    }

    /// Forward a `change` event from an input by its `name`
    pub fn change(&mut self, name: &str, value: &str) -> bool {
        self.inner.change_input(name, value)
    }

    /// Press an operation by name (`add`, `sqrt`, ...) and return the result
    pub fn press(&mut self, operation: &str) -> Option<String> {
        match operation.parse::<Operation>() {
            Ok(op) => {
                self.inner.press(op);
                Some(self.result())
            }
            Err(err) => {
                console_warn(&format!("press ignored: {err}"));
                None
            }
        }
    }

    /// Forward a `click` event from a button id and return the result
    pub fn click(&mut self, element_id: &str) -> Option<String> {
        self.inner.click(element_id).map(|_| self.result())
    }

    /// Current value for an input `name`
    #[wasm_bindgen(js_name = fieldValue)]
    pub fn value_of(&self, name: &str) -> Option<String> {
        self.inner.value_of(name).map(str::to_string)
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Markup for the widget with default prompts
#[wasm_bindgen]
pub fn markup() -> String {
    MockDom::calculator().to_markup()
}

/// Name of the read-only result input
#[wasm_bindgen(js_name = resultFieldName)]
pub fn result_field_name() -> String {
    RESULT_FIELD_NAME.to_string()
}

/// Browser builds install no tracing subscriber, so warnings go to the console
fn console_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("{message}");
}

/// Initialize the module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator widget initialized".into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format_number;

    #[test]
    fn test_browser_calculator_new() {
        let calc = BrowserCalculator::new();
        assert!(calc.first_number().is_empty());
        assert!(calc.result().is_empty());
    }

    #[test]
    fn test_from_config_json() {
        let mut calc =
            BrowserCalculator::from_config_json(r#"{"first_placeholder": "x"}"#).unwrap();
        calc.press("reset");
        assert_eq!(calc.first_number(), "x");
    }

    #[test]
    fn test_setters_and_press() {
        let mut calc = BrowserCalculator::default();
        calc.set_first_number("15".to_string());
        calc.set_second_number("10".to_string());
        assert_eq!(calc.press("multiply"), Some("150".to_string()));
        assert_eq!(calc.press("sqrt"), Some(format_number(15f64.sqrt())));
        assert_eq!(calc.press("modulo"), None);
    }

    #[test]
    fn test_unknown_press_keeps_result() {
        let mut calc = BrowserCalculator::new();
        calc.set_first_number("2".to_string());
        calc.set_second_number("5".to_string());
        assert_eq!(calc.press("power"), Some("32".to_string()));
        assert_eq!(calc.press("modulo"), None);
        assert_eq!(calc.result(), "32");
        assert_eq!(calc.first_number(), "2");
    }

    #[test]
    fn test_change_and_click() {
        let mut calc = BrowserCalculator::new();
        assert!(calc.change("firstNumberInput", "50"));
        assert!(calc.change("secondNumberInput", "0"));
        assert!(!calc.change("resultInput", "1"));
        assert_eq!(
            calc.click("btn-divide"),
            Some("Cannot Divide by Zero".to_string())
        );
        assert_eq!(calc.click("nothing"), None);
        assert_eq!(calc.second_number(), "0");
    }

    #[test]
    fn test_value_of() {
        let mut calc = BrowserCalculator::new();
        calc.press("reset");
        assert_eq!(
            calc.value_of("secondNumberInput"),
            Some("Enter Second Number".to_string())
        );
        assert_eq!(calc.value_of(&result_field_name()), Some(String::new()));
    }

    #[test]
    fn test_markup_contains_fields() {
        let html = markup();
        assert!(html.contains(r#"name="firstNumberInput""#));
        assert!(html.contains(r#"<input readonly="" name="resultInput">"#));
        assert!(html.contains(r#"id="btn-square-root""#));
    }
}
