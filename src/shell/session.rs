//! Session that drives a calculator from shell input.

use super::display::DisplaySink;
use super::history::{PhaseTransition, SessionHistory};
use crate::engine::Calculator;
use crate::input::{Input, InputError, Key};
use chrono::Utc;
use tracing::debug;

/// One calculator session: the engine, its display and a history.
///
/// Every handler takes `&mut self` and returns only after the input is fully
/// processed and the sink has been given the new text, so inputs can never
/// interleave.
///
/// # Example
///
/// ```rust
/// use keycalc::shell::{DisplayLog, Session};
///
/// let mut session = Session::new(DisplayLog::new());
/// assert_eq!(session.feed("2+3*4=").unwrap(), "20");
/// assert_eq!(session.display().current(), Some("20"));
/// ```
pub struct Session<D: DisplaySink> {
    calculator: Calculator,
    display: D,
    history: SessionHistory,
}

impl<D: DisplaySink> Session<D> {
    /// Start a session with a default calculator.
    pub fn new(display: D) -> Self {
        Self::with_calculator(Calculator::new(), display)
    }

    /// Start a session around an existing calculator. The sink receives the
    /// calculator's current text immediately.
    pub fn with_calculator(calculator: Calculator, mut display: D) -> Self {
        display.render(calculator.display());
        let history = SessionHistory::new(calculator.config().history_limit);
        Self {
            calculator,
            display,
            history,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Handle one input and return the new display text.
    pub fn handle(&mut self, input: Input) -> &str {
        let from = self.calculator.phase().clone();
        self.calculator.apply(input);
        let to = self.calculator.phase();

        debug!(
            %input,
            from = from.name(),
            to = to.name(),
            display = self.calculator.display(),
            "handled input"
        );

        if self.history.limit() > 0 {
            self.history.record(PhaseTransition {
                input,
                from,
                to: to.clone(),
                display: self.calculator.display().to_string(),
                timestamp: Utc::now(),
            });
        }

        self.display.render(self.calculator.display());
        self.calculator.display()
    }

    /// Handle a key press. Keys without a binding are left unhandled and
    /// give `None`.
    pub fn handle_key(&mut self, key: Key) -> Option<&str> {
        match Input::from_key(key) {
            Some(input) => Some(self.handle(input)),
            None => {
                debug!(?key, "unbound key");
                None
            }
        }
    }

    /// Handle a button press by its label.
    pub fn handle_label(&mut self, label: &str) -> Result<&str, InputError> {
        let input = Input::from_label(label)?;
        Ok(self.handle(input))
    }

    /// Handle a run of typed characters in order.
    ///
    /// The whole run is checked before any of it is handled, so an unbound
    /// character leaves the session untouched.
    pub fn feed(&mut self, keys: &str) -> Result<&str, InputError> {
        let inputs = Input::parse_sequence(keys)?;
        for input in inputs {
            self.handle(input);
        }
        Ok(self.calculator.display())
    }

    /// End the session and return the sink.
    pub fn into_display(self) -> D {
        self.display
    }
}
