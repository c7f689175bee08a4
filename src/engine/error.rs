//! Failures that can occur while evaluating calculator input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a computation.
///
/// None of these escape a [`Calculator`](super::Calculator): every failure
/// moves the engine into its error phase, which keeps a copy of the error
/// for the shell to inspect.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum CalcError {
    /// The entry buffer could not be read as a number.
    #[error("'{text}' is not a number")]
    Parse { text: String },

    /// Divisor of a divide or modulo operation was exactly zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Unary operation applied outside its domain.
    #[error("{operation} is undefined for {operand}")]
    Domain { operation: String, operand: f64 },

    /// Result was infinite or not a number.
    #[error("Result is out of range")]
    Overflow,
}
