//! Phase transition history.
//!
//! A bounded diagnostic log of how a session moved between phases. It is
//! not an undo stack and is never persisted.

use crate::engine::Phase;
use crate::input::Input;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single input and the phase change it caused.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use keycalc::engine::Phase;
/// use keycalc::input::Input;
/// use keycalc::shell::PhaseTransition;
///
/// let transition = PhaseTransition {
///     input: Input::from_label("7").unwrap(),
///     from: Phase::Idle,
///     to: Phase::EnteringFirstOperand,
///     display: "7".to_string(),
///     timestamp: Utc::now(),
/// };
///
/// assert!(transition.changed_phase());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The input that was handled
    pub input: Input,
    /// Phase before the input
    pub from: Phase,
    /// Phase after the input
    pub to: Phase,
    /// Display text after the input
    pub display: String,
    /// When the input was handled
    pub timestamp: DateTime<Utc>,
}

impl PhaseTransition {
    /// Whether the input moved the calculator to a different kind of phase.
    pub fn changed_phase(&self) -> bool {
        self.from.name() != self.to.name()
    }
}

/// Ordered, bounded history of handled inputs.
///
/// Once `limit` entries are held, recording a new one drops the oldest.
/// A limit of zero records nothing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionHistory {
    transitions: VecDeque<PhaseTransition>,
    limit: usize,
}

impl SessionHistory {
    /// Create an empty history holding at most `limit` transitions.
    pub fn new(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn record(&mut self, transition: PhaseTransition) {
        if self.limit == 0 {
            return;
        }
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &PhaseTransition> {
        self.transitions.iter()
    }

    /// Names of the phases traversed: the first retained `from` phase, then
    /// the `to` phase of every transition that changed phase.
    pub fn path(&self) -> Vec<&'static str> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(first.from.name());
        }
        for transition in self.transitions.iter().filter(|t| t.changed_phase()) {
            path.push(transition.to.name());
        }
        path
    }

    /// Time between the first and last retained transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
