//! Widget core: operand parsing, operation dispatch and formatting
//!
//! Nothing in here knows about terminals or the DOM. Every frontend wraps a
//! [`Calculator`] and mirrors its three text fields.

mod calculator;
mod format;
mod operand;
mod operations;

pub use calculator::{CalculatorState, Calculator, ClearReason, OperandField, Outcome};
pub use format::format_number;
pub use operand::parse_operand;
pub use operations::{Arithmetic, InputRequirement, Operation, ParseOperationError};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Markup name of the read-only result field
pub const RESULT_FIELD_NAME: &str = "resultInput";

/// Identifies one of the two operand inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandSlot {
    /// The first operand (used by every computing operation)
    First,
    /// The second operand (ignored by square root)
    Second,
}

impl OperandSlot {
    /// Both slots in display order
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Default placeholder prompt shown in an empty field
    #[must_use]
    pub const fn default_placeholder(self) -> &'static str {
        match self {
            Self::First => "Enter First Number",
            Self::Second => "Enter Second Number",
        }
    }

    /// Markup `name` attribute of the field
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::First => "firstNumberInput",
            Self::Second => "secondNumberInput",
        }
    }

    /// Looks a slot up by its markup name
    #[must_use]
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.field_name() == name)
    }
}

impl std::fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Calculator error types - every invalid condition ends up as one of these
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Operand text is not a finite number
    #[error("{slot} operand is not a number: {input:?}")]
    InvalidOperand {
        /// Which field held the text
        slot: OperandSlot,
        /// The raw text as entered
        input: String,
    },
    /// Divisor was exactly zero
    #[error("Cannot Divide by Zero")]
    DivideByZero,
    /// Square root of a negative number
    #[error("NaN")]
    NegativeSquareRoot,
}

impl CalcError {
    /// Returns true if this error sends the widget back to its reset state
    #[must_use]
    pub const fn triggers_reset(&self) -> bool {
        matches!(self, Self::InvalidOperand { .. })
    }
}
