//! Keyboard keys understood by the calculator.

use crate::engine::Digit;
use serde::{Deserialize, Serialize};

/// A key press as reported by the shell.
///
/// Printable keys arrive as [`Key::Char`] with the character they produce,
/// so shifted keys such as `+` need no modifier tracking here.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Numpad(Digit),
    NumpadDecimal,
    Enter,
    Backspace,
    Delete,
    Escape,
    F9,
}
