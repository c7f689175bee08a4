//! Input mapping errors.

use thiserror::Error;

/// Errors raised while translating shell input into calculator events.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown button label '{label}'")]
    UnknownSymbol { label: String },

    #[error("No calculator input is bound to '{ch}'")]
    UnmappedChar { ch: char },
}
