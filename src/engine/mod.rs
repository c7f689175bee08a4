//! The calculator engine.
//!
//! A single state machine interprets digit, operator and command inputs and
//! keeps the text to display:
//! - `Entry`: the number under construction, kept as text
//! - `Phase`: explicit state, carrying the accumulator and pending operator
//! - `BinaryOp` / `UnaryOp`: pure arithmetic that reports failures
//! - `Calculator`: the state machine tying them together
//!
//! Failures never escape the engine. They move it into `Phase::Error`,
//! which shows the configured error marker until the next digit or clear.

mod calculator;
mod entry;
mod error;
mod format;
mod operator;
mod phase;

pub use calculator::Calculator;
pub use entry::{Digit, Entry};
pub use error::CalcError;
pub use format::{format_number, DEFAULT_PRECISION, MAX_PRECISION};
pub use operator::{BinaryOp, LastOperation, UnaryOp};
pub use phase::Phase;
