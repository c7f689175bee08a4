//! Keycalc: a pocket-calculator input state machine
//!
//! Keycalc interprets button and keyboard input the way a simple desktop
//! calculator does: one pending operator at a time, immediate left-to-right
//! evaluation, and an error display that recovers on the next digit.
//!
//! # Modules
//!
//! - [`engine`]: the calculator state machine and its arithmetic
//! - [`input`]: symbolic input events and their key/button bindings
//! - [`config`]: validated engine configuration
//! - [`shell`]: sessions that feed input and publish the display text
//!
//! # Example
//!
//! ```rust
//! use keycalc::engine::Calculator;
//! use keycalc::input::Input;
//!
//! let mut calculator = Calculator::new();
//! for input in Input::parse_sequence("2+3*4=").unwrap() {
//!     calculator.apply(input);
//! }
//!
//! // Evaluated left to right: (2 + 3) × 4
//! assert_eq!(calculator.display(), "20");
//! ```

pub mod config;
pub mod engine;
pub mod input;
pub mod shell;

// Re-export commonly used types
pub use config::{CalculatorBuilder, EngineConfig};
pub use engine::{BinaryOp, CalcError, Calculator, Digit, Phase, UnaryOp};
pub use input::{Input, Key};
pub use shell::{DisplaySink, Session};
