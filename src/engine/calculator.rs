//! The calculator state machine.

use super::entry::{Digit, Entry};
use super::error::CalcError;
use super::operator::{BinaryOp, LastOperation, UnaryOp};
use super::phase::Phase;
use crate::config::{
    BuildError, CalculatorBuilder, ConsecutiveOperators, EngineConfig, EqualsPolicy,
};
use crate::input::Input;
use tracing::{debug, trace, warn};

/// Pocket calculator with immediate, left-to-right evaluation.
///
/// Every operation completes synchronously and never fails: a parse or
/// compute failure moves the calculator into [`Phase::Error`], shows the
/// error marker and leaves it ready for a fresh number.
///
/// # Example
///
/// ```rust
/// use keycalc::engine::{BinaryOp, Calculator, Digit};
///
/// let mut calculator = Calculator::new();
/// let digit = |d| Digit::new(d).unwrap();
///
/// calculator.process_digit(digit(2));
/// calculator.process_operator(BinaryOp::Add);
/// calculator.process_digit(digit(3));
/// calculator.process_operator(BinaryOp::Multiply);
/// calculator.process_digit(digit(4));
/// calculator.equals();
///
/// // No precedence: (2 + 3) × 4
/// assert_eq!(calculator.display(), "20");
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    entry: Entry,
    phase: Phase,
    config: EngineConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self {
            entry: Entry::new(),
            phase: Phase::Idle,
            config: EngineConfig::default(),
        }
    }

    /// Create a calculator from a configuration, validating it first.
    pub fn with_config(config: EngineConfig) -> Result<Self, BuildError> {
        Ok(Self {
            config: config.validated()?,
            ..Self::new()
        })
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    /// Text the shell should render.
    pub fn display(&self) -> &str {
        if self.phase.is_error() {
            &self.config.error_marker
        } else {
            self.entry.as_str()
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.phase.accumulator()
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.phase.pending_operator()
    }

    pub fn resets_on_next_digit(&self) -> bool {
        self.phase.resets_on_next_digit()
    }

    pub fn is_error(&self) -> bool {
        self.phase.is_error()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Route one input event and return the resulting display text.
    pub fn apply(&mut self, input: Input) -> &str {
        trace!(%input, phase = self.phase.name(), "input");
        match input {
            Input::Digit(digit) => self.process_digit(digit),
            Input::DecimalPoint => self.decimal_point(),
            Input::Operator(op) => self.process_operator(op),
            Input::Equals => self.equals(),
            Input::Clear => self.clear(),
            Input::Backspace => self.backspace(),
            Input::ToggleSign => self.toggle_sign(),
            Input::Unary(op) => self.apply_unary(op),
        }
        self.display()
    }

    /// Append a digit, starting a fresh number if the last input finished
    /// one.
    pub fn process_digit(&mut self, digit: Digit) {
        self.begin_entry();
        if !self.entry.push_digit(digit, self.config.max_digits) {
            debug!(max_digits = self.config.max_digits, "digit limit reached");
        }
    }

    /// Append the decimal point; a second one in the same number is ignored.
    pub fn decimal_point(&mut self) {
        self.begin_entry();
        self.entry.push_decimal_point();
    }

    /// Hold `operator`, first evaluating any operation already pending.
    pub fn process_operator(&mut self, operator: BinaryOp) {
        let outcome = match self.phase {
            Phase::Error { .. } => return,
            Phase::Idle | Phase::EnteringFirstOperand | Phase::FirstOperandEvaluated => {
                self.entry.value()
            }
            Phase::ShowingResult { accumulator, .. } => Ok(accumulator),
            Phase::OperatorPending { accumulator, .. }
                if self.config.consecutive_operators == ConsecutiveOperators::Replace =>
            {
                Ok(accumulator)
            }
            Phase::OperatorPending {
                accumulator,
                operator: pending,
            }
            | Phase::EnteringSecondOperand {
                accumulator,
                operator: pending,
            } => self.chain(accumulator, pending),
        };

        self.settle(outcome.map(|accumulator| Phase::OperatorPending {
            accumulator,
            operator,
        }));
    }

    /// Complete the pending operation.
    ///
    /// Without a pending operation this does nothing, unless the
    /// configuration asks to repeat the last one.
    pub fn equals(&mut self) {
        let outcome = match self.phase {
            Phase::OperatorPending {
                accumulator,
                operator,
            }
            | Phase::EnteringSecondOperand {
                accumulator,
                operator,
            } => self.finish(accumulator, operator),
            Phase::ShowingResult {
                accumulator,
                last: Some(last),
            } if self.config.equals_policy == EqualsPolicy::RepeatLast => self
                .compute(accumulator, last.operator, last.operand)
                .map(|accumulator| Phase::ShowingResult {
                    accumulator,
                    last: Some(last),
                }),
            _ => return,
        };

        self.settle(outcome);
    }

    /// Return to the initial state.
    pub fn clear(&mut self) {
        self.entry.reset();
        self.set_phase(Phase::Idle);
    }

    /// Remove the last typed character. A finished value is cleared whole.
    pub fn backspace(&mut self) {
        let next = match self.phase {
            Phase::Idle => return,
            Phase::EnteringFirstOperand | Phase::EnteringSecondOperand { .. } => {
                self.entry.backspace();
                return;
            }
            Phase::OperatorPending {
                accumulator,
                operator,
            } => Phase::EnteringSecondOperand {
                accumulator,
                operator,
            },
            Phase::FirstOperandEvaluated | Phase::ShowingResult { .. } => {
                Phase::EnteringFirstOperand
            }
            Phase::Error { .. } => Phase::Idle,
        };

        self.entry.reset();
        self.set_phase(next);
    }

    /// Negate the entry. `"0"` is left alone.
    pub fn toggle_sign(&mut self) {
        match self.phase {
            Phase::Error { .. } => {}
            Phase::ShowingResult { last, .. } => {
                self.entry.toggle_sign();
                let outcome = self
                    .entry
                    .value()
                    .map(|accumulator| Phase::ShowingResult { accumulator, last });
                self.settle(outcome);
            }
            _ => self.entry.toggle_sign(),
        }
    }

    /// Replace the entry with `op` applied to it. The pending operation, if
    /// any, is kept.
    pub fn apply_unary(&mut self, op: UnaryOp) {
        let outcome = match self.phase {
            Phase::Error { .. } => return,
            Phase::Idle | Phase::EnteringFirstOperand | Phase::FirstOperandEvaluated => self
                .evaluate_unary(op)
                .map(|_| Phase::FirstOperandEvaluated),
            Phase::ShowingResult { last, .. } => self
                .evaluate_unary(op)
                .map(|accumulator| Phase::ShowingResult { accumulator, last }),
            Phase::OperatorPending {
                accumulator,
                operator,
            }
            | Phase::EnteringSecondOperand {
                accumulator,
                operator,
            } => self
                .evaluate_unary(op)
                .map(|_| Phase::OperatorPending {
                    accumulator,
                    operator,
                }),
        };

        self.settle(outcome);
    }

    fn begin_entry(&mut self) {
        let next = match self.phase {
            Phase::EnteringSecondOperand { .. } => return,
            Phase::Idle | Phase::EnteringFirstOperand => Phase::EnteringFirstOperand,
            Phase::OperatorPending {
                accumulator,
                operator,
            } => {
                self.entry.reset();
                Phase::EnteringSecondOperand {
                    accumulator,
                    operator,
                }
            }
            Phase::FirstOperandEvaluated | Phase::ShowingResult { .. } | Phase::Error { .. } => {
                self.entry.reset();
                Phase::EnteringFirstOperand
            }
        };

        self.set_phase(next);
    }

    /// Evaluate the pending operation against the entry, for a chained
    /// operator press.
    fn chain(&mut self, accumulator: f64, operator: BinaryOp) -> Result<f64, CalcError> {
        let operand = self.entry.value()?;
        self.compute(accumulator, operator, operand)
    }

    fn finish(&mut self, accumulator: f64, operator: BinaryOp) -> Result<Phase, CalcError> {
        let operand = self.entry.value()?;
        let accumulator = self.compute(accumulator, operator, operand)?;
        Ok(Phase::ShowingResult {
            accumulator,
            last: Some(LastOperation { operator, operand }),
        })
    }

    /// Apply `operator`, display the result and return its displayed value.
    /// The entry is untouched on failure.
    fn compute(&mut self, left: f64, operator: BinaryOp, right: f64) -> Result<f64, CalcError> {
        let result = operator.apply(left, right)?;
        debug!(left, %operator, right, result, "computed");
        self.store(result)
    }

    fn evaluate_unary(&mut self, op: UnaryOp) -> Result<f64, CalcError> {
        let operand = self.entry.value()?;
        let result = op.apply(operand)?;
        debug!(operation = op.name(), operand, result, "computed");
        self.store(result)
    }

    fn store(&mut self, result: f64) -> Result<f64, CalcError> {
        let entry = Entry::from_value(result, self.config.precision);
        // Rounding near f64::MAX can print a value that parses as infinity.
        let value = entry.value().map_err(|_| CalcError::Overflow)?;
        self.entry = entry;
        Ok(value)
    }

    fn settle(&mut self, outcome: Result<Phase, CalcError>) {
        match outcome {
            Ok(next) => self.set_phase(next),
            Err(error) => self.fail(error),
        }
    }

    fn fail(&mut self, error: CalcError) {
        warn!(%error, phase = self.phase.name(), "calculation failed, resetting");
        self.entry.reset();
        self.set_phase(Phase::Error { error });
    }

    fn set_phase(&mut self, next: Phase) {
        if self.phase.name() != next.name() {
            debug!(from = self.phase.name(), to = next.name(), "phase change");
        }
        self.phase = next;
    }
}
