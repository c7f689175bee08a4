//! Binary and unary operators.
//!
//! Operators are pure functions over `f64`. Each returns an error instead of
//! an infinity or NaN so the engine can surface the failure.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator awaiting its right operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOp {
    /// Every binary operator, in keypad order.
    pub const ALL: [BinaryOp; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
    ];

    /// Symbol shown on the keypad.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Modulo => '%',
        }
    }

    /// Apply the operator to `left` and `right`.
    ///
    /// A zero divisor is a [`CalcError::DivisionByZero`] rather than an
    /// infinity, and any non-finite result is a [`CalcError::Overflow`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::engine::{BinaryOp, CalcError};
    ///
    /// assert_eq!(BinaryOp::Multiply.apply(6.0, 7.0), Ok(42.0));
    /// assert_eq!(BinaryOp::Modulo.apply(-7.0, 3.0), Ok(-1.0));
    /// assert_eq!(BinaryOp::Divide.apply(5.0, 0.0), Err(CalcError::DivisionByZero));
    /// ```
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, CalcError> {
        let result = match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide | Self::Modulo if right == 0.0 => {
                return Err(CalcError::DivisionByZero)
            }
            Self::Divide => left / right,
            Self::Modulo => left % right,
        };

        finite(result)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operation that acts on the entry alone.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Square,
    SquareRoot,
    Reciprocal,
}

impl UnaryOp {
    /// Human readable name, used in domain errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Square => "Square",
            Self::SquareRoot => "Square root",
            Self::Reciprocal => "Reciprocal",
        }
    }

    /// Apply the operation to `operand`.
    ///
    /// Square root of a negative number and reciprocal of zero are
    /// [`CalcError::Domain`] failures.
    pub fn apply(&self, operand: f64) -> Result<f64, CalcError> {
        let result = match self {
            Self::Square => operand * operand,
            Self::SquareRoot if operand < 0.0 => return Err(self.domain_error(operand)),
            Self::SquareRoot => operand.sqrt(),
            Self::Reciprocal if operand == 0.0 => return Err(self.domain_error(operand)),
            Self::Reciprocal => 1.0 / operand,
        };

        finite(result)
    }

    fn domain_error(&self, operand: f64) -> CalcError {
        CalcError::Domain {
            operation: self.name().to_string(),
            operand,
        }
    }
}

/// Operator and right operand of the last completed binary operation.
///
/// Kept after Equals so a repeated Equals can re-apply it.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct LastOperation {
    pub operator: BinaryOp,
    pub operand: f64,
}

fn finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Overflow)
    }
}
