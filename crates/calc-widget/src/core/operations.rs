//! The seven widget operations and their arithmetic
//!
//! Triggers are addressed by [`Operation`], never by button position.

use std::str::FromStr;

use thiserror::Error;

use crate::core::{CalcError, CalcResult};

/// Type-safe operation enum - one variant per trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Square root of the first operand
    SquareRoot,
    /// First operand raised to the second
    Power,
    /// Clear both operands and the result
    Reset,
}

/// Which operand fields an operation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRequirement {
    /// Both operands must parse
    Both,
    /// Only the first operand must parse; the second is never read
    FirstOnly,
    /// No operand is read
    Nothing,
}

impl InputRequirement {
    /// Returns true if the second operand is read
    #[must_use]
    pub const fn needs_second(self) -> bool {
        matches!(self, Self::Both)
    }

    /// Returns true if the first operand is read
    #[must_use]
    pub const fn needs_first(self) -> bool {
        !matches!(self, Self::Nothing)
    }
}

impl Operation {
    /// All operations in trigger order
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::SquareRoot,
        Self::Power,
        Self::Reset,
    ];

    /// Stable identifier, used for element IDs and lookup by name
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::SquareRoot => "square-root",
            Self::Power => "power",
            Self::Reset => "reset",
        }
    }

    /// Button caption
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::SquareRoot => "Sqrt",
            Self::Power => "Power",
            Self::Reset => "Reset",
        }
    }

    /// Operator symbol for compact display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::SquareRoot => "√",
            Self::Power => "^",
            Self::Reset => "C",
        }
    }

    /// The per-operation input requirement table
    #[must_use]
    pub const fn requirement(&self) -> InputRequirement {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power => {
                InputRequirement::Both
            }
            Self::SquareRoot => InputRequirement::FirstOnly,
            Self::Reset => InputRequirement::Nothing,
        }
    }

    /// Position of the trigger in the fixed UI order
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Add => 0,
            Self::Subtract => 1,
            Self::Multiply => 2,
            Self::Divide => 3,
            Self::SquareRoot => 4,
            Self::Power => 5,
            Self::Reset => 6,
        }
    }

    /// Operation at a trigger position
    #[must_use]
    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    /// Returns true for every operation that produces a value
    #[must_use]
    pub const fn computes(&self) -> bool {
        !matches!(self, Self::Reset)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when an operation name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0:?}")]
pub struct ParseOperationError(pub String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let op = match name.as_str() {
            "add" | "plus" | "+" => Self::Add,
            "subtract" | "minus" | "-" => Self::Subtract,
            "multiply" | "times" | "*" => Self::Multiply,
            "divide" | "/" => Self::Divide,
            "square-root" | "squareroot" | "square_root" | "sqrt" => Self::SquareRoot,
            "power" | "pow" | "^" => Self::Power,
            "reset" | "clear" => Self::Reset,
            _ => return Err(ParseOperationError(s.to_string())),
        };
        Ok(op)
    }
}

/// Plain arithmetic behind the computing operations
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic;

impl Arithmetic {
    /// Applies a computing operation. `b` is ignored by square root.
    ///
    /// Reset has no value; asking for one yields `None`.
    pub fn apply(op: Operation, a: f64, b: f64) -> Option<CalcResult<f64>> {
        let result = match op {
            Operation::Add => Ok(Self::add(a, b)),
            Operation::Subtract => Ok(Self::subtract(a, b)),
            Operation::Multiply => Ok(Self::multiply(a, b)),
            Operation::Divide => Self::divide(a, b),
            Operation::SquareRoot => Self::square_root(a),
            Operation::Power => Ok(Self::power(a, b)),
            Operation::Reset => return None,
        };
        Some(result)
    }

    /// Addition: a + b
    #[must_use]
    pub fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    /// Subtraction: a - b
    #[must_use]
    pub fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    /// Multiplication: a * b
    #[must_use]
    pub fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivideByZero);
        }
        Ok(a / b)
    }

    /// Square root: √a
    pub fn square_root(a: f64) -> CalcResult<f64> {
        if a < 0.0 {
            return Err(CalcError::NegativeSquareRoot);
        }
        Ok(a.sqrt())
    }

    /// Power: a ^ b
    #[must_use]
    pub fn power(a: f64, b: f64) -> f64 {
        a.powf(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operation enum tests ---

    #[test]
    fn test_operation_order() {
        let ids: Vec<_> = Operation::ALL.iter().map(Operation::id).collect();
        assert_eq!(
            ids,
            [
                "add",
                "subtract",
                "multiply",
                "divide",
                "square-root",
                "power",
                "reset"
            ]
        );
    }

    #[test]
    fn test_operation_position_round_trip() {
        for (i, op) in Operation::ALL.iter().enumerate() {
            assert_eq!(op.position(), i);
            assert_eq!(Operation::from_position(i), Some(*op));
        }
        assert_eq!(Operation::from_position(7), None);
    }

    #[test]
    fn test_requirement_table() {
        assert_eq!(Operation::Add.requirement(), InputRequirement::Both);
        assert_eq!(Operation::Subtract.requirement(), InputRequirement::Both);
        assert_eq!(Operation::Multiply.requirement(), InputRequirement::Both);
        assert_eq!(Operation::Divide.requirement(), InputRequirement::Both);
        assert_eq!(Operation::Power.requirement(), InputRequirement::Both);
        assert_eq!(
            Operation::SquareRoot.requirement(),
            InputRequirement::FirstOnly
        );
        assert_eq!(Operation::Reset.requirement(), InputRequirement::Nothing);
    }

    #[test]
    fn test_requirement_flags() {
        assert!(InputRequirement::Both.needs_first());
        assert!(InputRequirement::Both.needs_second());
        assert!(InputRequirement::FirstOnly.needs_first());
        assert!(!InputRequirement::FirstOnly.needs_second());
        assert!(!InputRequirement::Nothing.needs_first());
        assert!(!InputRequirement::Nothing.needs_second());
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("Square-Root".parse::<Operation>(), Ok(Operation::SquareRoot));
        assert_eq!("SquareRoot".parse::<Operation>(), Ok(Operation::SquareRoot));
        assert_eq!("sqrt".parse::<Operation>(), Ok(Operation::SquareRoot));
        assert_eq!(" pow ".parse::<Operation>(), Ok(Operation::Power));
        assert_eq!("CLEAR".parse::<Operation>(), Ok(Operation::Reset));
    }

    #[test]
    fn test_operation_from_str_unknown() {
        let err = "modulo".parse::<Operation>().unwrap_err();
        assert_eq!(err, ParseOperationError("modulo".into()));
        assert_eq!(err.to_string(), "unknown operation: \"modulo\"");
    }

    #[test]
    fn test_operation_display_is_id() {
        for op in Operation::ALL {
            assert_eq!(op.to_string(), op.id());
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_only_reset_does_not_compute() {
        let non_computing: Vec<_> = Operation::ALL.iter().filter(|op| !op.computes()).collect();
        assert_eq!(non_computing, [&Operation::Reset]);
    }

    // --- Arithmetic tests ---

    #[test]
    fn test_add() {
        assert_eq!(Arithmetic::add(15.0, 10.0), 25.0);
        assert_eq!(Arithmetic::add(-2.0, 5.0), 3.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Arithmetic::subtract(15.0, 10.0), 5.0);
        assert_eq!(Arithmetic::subtract(3.0, 5.0), -2.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(Arithmetic::multiply(15.0, 10.0), 150.0);
        assert_eq!(Arithmetic::multiply(-2.0, 3.0), -6.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(Arithmetic::divide(50.0, 10.0), Ok(5.0));
        assert_eq!(Arithmetic::divide(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Arithmetic::divide(50.0, 0.0), Err(CalcError::DivideByZero));
        assert_eq!(Arithmetic::divide(0.0, 0.0), Err(CalcError::DivideByZero));
    }

    #[test]
    fn test_divide_by_negative_zero() {
        assert_eq!(Arithmetic::divide(1.0, -0.0), Err(CalcError::DivideByZero));
    }

    #[test]
    fn test_square_root() {
        assert_eq!(Arithmetic::square_root(16.0), Ok(4.0));
        assert_eq!(Arithmetic::square_root(0.0), Ok(0.0));
    }

    #[test]
    fn test_square_root_negative() {
        assert_eq!(
            Arithmetic::square_root(-16.0),
            Err(CalcError::NegativeSquareRoot)
        );
    }

    #[test]
    fn test_power() {
        assert_eq!(Arithmetic::power(16.0, 0.5), 4.0);
        assert_eq!(Arithmetic::power(16.0, 0.0), 1.0);
        assert_eq!(Arithmetic::power(2.0, -1.0), 0.5);
    }

    #[test]
    fn test_power_negative_base_fractional_exponent_is_nan() {
        assert!(Arithmetic::power(-8.0, 0.5).is_nan());
    }

    #[test]
    fn test_apply_dispatch() {
        assert_eq!(Arithmetic::apply(Operation::Add, 15.0, 10.0), Some(Ok(25.0)));
        assert_eq!(
            Arithmetic::apply(Operation::Divide, 1.0, 0.0),
            Some(Err(CalcError::DivideByZero))
        );
        assert_eq!(
            Arithmetic::apply(Operation::SquareRoot, 16.0, f64::NAN),
            Some(Ok(4.0))
        );
        assert_eq!(Arithmetic::apply(Operation::Reset, 1.0, 2.0), None);
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            prop_assert_eq!(Arithmetic::add(a, b), Arithmetic::add(b, a));
        }

        #[test]
        fn prop_multiply_commutative(a in -1e5f64..1e5f64, b in -1e5f64..1e5f64) {
            prop_assert_eq!(Arithmetic::multiply(a, b), Arithmetic::multiply(b, a));
        }

        #[test]
        fn prop_divide_by_zero_always_errors(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Arithmetic::divide(a, 0.0), Err(CalcError::DivideByZero));
        }

        #[test]
        fn prop_divide_by_self(a in -1e10f64..1e10f64) {
            prop_assume!(a != 0.0);
            let result = Arithmetic::divide(a, a).unwrap();
            prop_assert!((result - 1.0).abs() < 1e-10);
        }

        #[test]
        fn prop_square_root_squares_back(a in 0.0f64..1e8f64) {
            let root = Arithmetic::square_root(a).unwrap();
            prop_assert!((root * root - a).abs() <= a * 1e-12 + 1e-12);
        }

        #[test]
        fn prop_square_root_negative_errors(a in -1e8f64..-1e-9f64) {
            prop_assert_eq!(Arithmetic::square_root(a), Err(CalcError::NegativeSquareRoot));
        }

        #[test]
        fn prop_power_zero_exponent(a in -1e5f64..1e5f64) {
            prop_assert_eq!(Arithmetic::power(a, 0.0), 1.0);
        }
    }
}
