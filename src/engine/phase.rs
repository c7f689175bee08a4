//! Explicit calculator phases.
//!
//! Each phase carries only the data that is meaningful in it, so a pending
//! operator without a left operand cannot be represented.

use super::error::CalcError;
use super::operator::{BinaryOp, LastOperation};
use serde::{Deserialize, Serialize};

/// Where the calculator is in a calculation.
///
/// # Example
///
/// ```rust
/// use keycalc::engine::{BinaryOp, Phase};
///
/// let phase = Phase::OperatorPending {
///     accumulator: 2.0,
///     operator: BinaryOp::Add,
/// };
///
/// assert_eq!(phase.name(), "OperatorPending");
/// assert_eq!(phase.accumulator(), Some(2.0));
/// assert!(phase.resets_on_next_digit());
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Session start or just cleared.
    #[default]
    Idle,

    /// Typing the left operand.
    EnteringFirstOperand,

    /// A unary operation replaced the left operand; the next digit starts over.
    FirstOperandEvaluated,

    /// Operator pressed, right operand not started yet.
    OperatorPending {
        accumulator: f64,
        operator: BinaryOp,
    },

    /// Typing the right operand.
    EnteringSecondOperand {
        accumulator: f64,
        operator: BinaryOp,
    },

    /// Equals produced a result.
    ShowingResult {
        accumulator: f64,
        last: Option<LastOperation>,
    },

    /// A computation failed; the display shows the error marker.
    Error { error: CalcError },
}

impl Phase {
    /// Name of the phase for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::EnteringFirstOperand => "EnteringFirstOperand",
            Self::FirstOperandEvaluated => "FirstOperandEvaluated",
            Self::OperatorPending { .. } => "OperatorPending",
            Self::EnteringSecondOperand { .. } => "EnteringSecondOperand",
            Self::ShowingResult { .. } => "ShowingResult",
            Self::Error { .. } => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Left operand or running result, if any.
    pub fn accumulator(&self) -> Option<f64> {
        match self {
            Self::OperatorPending { accumulator, .. }
            | Self::EnteringSecondOperand { accumulator, .. }
            | Self::ShowingResult { accumulator, .. } => Some(*accumulator),
            _ => None,
        }
    }

    /// Binary operator awaiting its right operand, if any.
    pub fn pending_operator(&self) -> Option<BinaryOp> {
        match self {
            Self::OperatorPending { operator, .. }
            | Self::EnteringSecondOperand { operator, .. } => Some(*operator),
            _ => None,
        }
    }

    /// Whether the next digit replaces the entry instead of extending it.
    pub fn resets_on_next_digit(&self) -> bool {
        matches!(
            self,
            Self::FirstOperandEvaluated
                | Self::OperatorPending { .. }
                | Self::ShowingResult { .. }
                | Self::Error { .. }
        )
    }
}
