//! The imperative shell around the engine.
//!
//! The engine is a plain state machine; this module connects it to the
//! outside: inputs come in through a [`Session`], display text goes out
//! through a [`DisplaySink`], and a [`SessionHistory`] keeps a bounded record
//! of phase transitions for diagnostics.

mod display;
mod history;
mod session;

pub use display::{DisplayLog, DisplaySink};
pub use history::{PhaseTransition, SessionHistory};
pub use session::Session;
