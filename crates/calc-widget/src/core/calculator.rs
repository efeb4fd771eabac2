//! Widget state machine
//!
//! Owns the two operand fields and the read-only result field. A press reads
//! only the current operand text, so presses never depend on each other.

use tracing::debug;

use crate::config::CalculatorConfig;
use crate::core::{
    format_number, parse_operand, Arithmetic, CalcError, CalcResult, OperandSlot, Operation,
};

/// One operand input: its raw text plus the prompt it falls back to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandField {
    slot: OperandSlot,
    placeholder: String,
    text: String,
}

impl OperandField {
    /// Creates an empty field with the given placeholder prompt
    #[must_use]
    pub fn new(slot: OperandSlot, placeholder: &str) -> Self {
        Self {
            slot,
            placeholder: placeholder.to_string(),
            text: String::new(),
        }
    }

    /// Which operand this is
    #[must_use]
    pub fn slot(&self) -> OperandSlot {
        self.slot
    }

    /// The raw text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The placeholder prompt
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns true if the field holds its placeholder prompt as text
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        self.text == self.placeholder
    }

    /// Replaces the raw text
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Puts the placeholder prompt back as the field text
    pub fn reset(&mut self) {
        self.text.clone_from(&self.placeholder);
    }

    /// Parses the field text as a number
    pub fn parse(&self) -> CalcResult<f64> {
        parse_operand(self.slot, &self.text)
    }
}

/// Observable widget state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculatorState {
    /// Freshly mounted or just reset
    #[default]
    Idle,
    /// Operand text changed since the last press
    Editing,
    /// A numeric result is shown
    Result,
    /// An error message is shown
    Error,
}

/// Why the widget went back to its reset state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearReason {
    /// Reset was pressed
    Requested,
    /// A required operand did not parse
    InvalidInput(CalcError),
}

/// What a single press did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A number was computed and shown
    Value(f64),
    /// An error message was shown; operands were kept
    Failed(CalcError),
    /// Operands went back to their prompts and the result was cleared
    Cleared(ClearReason),
}

/// The calculator widget
#[derive(Debug, Clone)]
pub struct Calculator {
    first: OperandField,
    second: OperandField,
    result: String,
    state: CalculatorState,
    divide_by_zero_message: String,
    negative_root_message: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a widget with the default prompts and messages
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a widget using the prompts and messages from `config`
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            first: OperandField::new(OperandSlot::First, &config.first_placeholder),
            second: OperandField::new(OperandSlot::Second, &config.second_placeholder),
            result: String::new(),
            state: CalculatorState::Idle,
            divide_by_zero_message: config.divide_by_zero_message.clone(),
            negative_root_message: config.negative_root_message.clone(),
        }
    }

    /// Returns an operand field
    #[must_use]
    pub fn field(&self, slot: OperandSlot) -> &OperandField {
        match slot {
            OperandSlot::First => &self.first,
            OperandSlot::Second => &self.second,
        }
    }

    fn field_mut(&mut self, slot: OperandSlot) -> &mut OperandField {
        match slot {
            OperandSlot::First => &mut self.first,
            OperandSlot::Second => &mut self.second,
        }
    }

    /// Stores new raw text for an operand
    pub fn set_operand(&mut self, slot: OperandSlot, text: &str) {
        self.field_mut(slot).set_text(text);
        self.state = CalculatorState::Editing;
    }

    /// Stores new raw text for the first operand
    pub fn set_first(&mut self, text: &str) {
        self.set_operand(OperandSlot::First, text);
    }

    /// Stores new raw text for the second operand
    pub fn set_second(&mut self, text: &str) {
        self.set_operand(OperandSlot::Second, text);
    }

    /// Raw text of an operand
    #[must_use]
    pub fn operand_text(&self, slot: OperandSlot) -> &str {
        self.field(slot).text()
    }

    /// Raw text of the first operand
    #[must_use]
    pub fn first_text(&self) -> &str {
        self.first.text()
    }

    /// Raw text of the second operand
    #[must_use]
    pub fn second_text(&self) -> &str {
        self.second.text()
    }

    /// Text of the result field
    #[must_use]
    pub fn result_text(&self) -> &str {
        &self.result
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> CalculatorState {
        self.state
    }

    /// Overwrites the result field directly.
    ///
    /// The field is read-only to users; this exists so a harness can check
    /// that a later press replaces whatever was there.
    pub fn force_result(&mut self, text: &str) {
        self.result = text.to_string();
    }

    /// Activates a trigger
    pub fn press(&mut self, op: Operation) -> Outcome {
        let outcome = self.evaluate(op);
        match &outcome {
            Outcome::Value(value) => {
                self.result = format_number(*value);
                self.state = CalculatorState::Result;
            }
            Outcome::Failed(err) => {
                self.result = self.error_message(err);
                self.state = CalculatorState::Error;
            }
            Outcome::Cleared(reason) => {
                if let ClearReason::InvalidInput(err) = reason {
                    debug!(operation = %op, error = %err, "invalid operand, resetting");
                }
                self.reset();
            }
        }
        debug!(operation = %op, result = %self.result, state = ?self.state, "trigger pressed");
        outcome
    }

    /// Puts both operands back to their prompts and clears the result
    pub fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.result.clear();
        self.state = CalculatorState::Idle;
    }

    fn evaluate(&self, op: Operation) -> Outcome {
        let requirement = op.requirement();
        if !requirement.needs_first() {
            return Outcome::Cleared(ClearReason::Requested);
        }

        let operands = self.first.parse().and_then(|a| {
            let b = if requirement.needs_second() {
                self.second.parse()?
            } else {
                f64::NAN
            };
            Ok((a, b))
        });
        let (a, b) = match operands {
            Ok(pair) => pair,
            Err(err) if err.triggers_reset() => {
                return Outcome::Cleared(ClearReason::InvalidInput(err));
            }
            Err(err) => return Outcome::Failed(err),
        };

        match Arithmetic::apply(op, a, b) {
            Some(Ok(value)) => Outcome::Value(value),
            Some(Err(err)) => Outcome::Failed(err),
            None => Outcome::Cleared(ClearReason::Requested),
        }
    }

    fn error_message(&self, err: &CalcError) -> String {
        match err {
            CalcError::DivideByZero => self.divide_by_zero_message.clone(),
            CalcError::NegativeSquareRoot => self.negative_root_message.clone(),
            CalcError::InvalidOperand { .. } => String::new(),
        }
    }
}
