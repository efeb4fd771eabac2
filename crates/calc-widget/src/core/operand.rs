//! Operand text parsing

use crate::core::{CalcError, CalcResult, OperandSlot};

/// Parses the raw text of one operand field.
///
/// Surrounding whitespace is ignored. Empty text, garbage and non-finite
/// literals such as `inf` or `NaN` are rejected.
pub fn parse_operand(slot: OperandSlot, text: &str) -> CalcResult<f64> {
    let invalid = || CalcError::InvalidOperand {
        slot,
        input: text.to_string(),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}
