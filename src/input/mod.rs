//! Translation of buttons and keys into calculator inputs.
//!
//! The shell owns the widgets and the keyboard; this module owns the
//! bindings so every shell maps input the same way.

mod error;
mod event;
mod key;

pub use error::InputError;
pub use event::Input;
pub use key::Key;
