//! Symbolic input events.

use super::error::InputError;
use super::key::Key;
use crate::engine::{BinaryOp, Digit, UnaryOp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One logical calculator input.
///
/// Buttons and keys map onto these; the engine never sees raw input.
///
/// # Example
///
/// ```rust
/// use keycalc::engine::BinaryOp;
/// use keycalc::input::{Input, Key};
///
/// assert_eq!(Input::from_label("×"), Ok(Input::Operator(BinaryOp::Multiply)));
/// assert_eq!(Input::from_key(Key::Char('-')), Some(Input::Operator(BinaryOp::Subtract)));
/// assert_eq!(Input::from_key(Key::Escape), Some(Input::Clear));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Input {
    Digit(Digit),
    DecimalPoint,
    Operator(BinaryOp),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
    Unary(UnaryOp),
}

impl Input {
    /// Map a button label to its input.
    pub fn from_label(label: &str) -> Result<Self, InputError> {
        let label = label.trim();
        let input = match label {
            "." => Self::DecimalPoint,
            "+" => Self::Operator(BinaryOp::Add),
            "-" | "−" => Self::Operator(BinaryOp::Subtract),
            "×" | "*" => Self::Operator(BinaryOp::Multiply),
            "÷" | "/" => Self::Operator(BinaryOp::Divide),
            "%" | "mod" => Self::Operator(BinaryOp::Modulo),
            "=" => Self::Equals,
            "C" | "AC" => Self::Clear,
            "⌫" | "←" => Self::Backspace,
            "±" | "+/-" => Self::ToggleSign,
            "x²" => Self::Unary(UnaryOp::Square),
            "√" | "√x" => Self::Unary(UnaryOp::SquareRoot),
            "1/x" => Self::Unary(UnaryOp::Reciprocal),
            _ => {
                let mut chars = label.chars();
                match (chars.next().and_then(Digit::from_char), chars.next()) {
                    (Some(digit), None) => Self::Digit(digit),
                    _ => {
                        return Err(InputError::UnknownSymbol {
                            label: label.to_string(),
                        })
                    }
                }
            }
        };
        Ok(input)
    }

    /// Map a typed character to its input, if it has one.
    pub fn from_char(ch: char) -> Option<Self> {
        if let Some(digit) = Digit::from_char(ch) {
            return Some(Self::Digit(digit));
        }

        let input = match ch {
            '.' => Self::DecimalPoint,
            '+' => Self::Operator(BinaryOp::Add),
            '-' | '−' => Self::Operator(BinaryOp::Subtract),
            '*' | '×' => Self::Operator(BinaryOp::Multiply),
            '/' | '÷' => Self::Operator(BinaryOp::Divide),
            '%' => Self::Operator(BinaryOp::Modulo),
            '=' | '\n' | '\r' => Self::Equals,
            'c' | 'C' => Self::Clear,
            '\u{8}' | '\u{7f}' => Self::Backspace,
            's' | 'S' | '±' => Self::ToggleSign,
            'q' | 'Q' => Self::Unary(UnaryOp::Square),
            '@' | '√' => Self::Unary(UnaryOp::SquareRoot),
            'r' | 'R' => Self::Unary(UnaryOp::Reciprocal),
            _ => return None,
        };
        Some(input)
    }

    /// Map a key press to its input. Unbound keys give `None` and should be
    /// left for the shell to handle.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char(ch) => Self::from_char(ch),
            Key::Numpad(digit) => Some(Self::Digit(digit)),
            Key::NumpadDecimal => Some(Self::DecimalPoint),
            Key::Enter => Some(Self::Equals),
            Key::Backspace => Some(Self::Backspace),
            Key::Delete | Key::Escape => Some(Self::Clear),
            Key::F9 => Some(Self::ToggleSign),
        }
    }

    /// Map a run of typed characters, skipping whitespace other than line
    /// breaks.
    pub fn parse_sequence(keys: &str) -> Result<Vec<Self>, InputError> {
        keys.chars()
            .filter(|ch| !ch.is_whitespace() || matches!(ch, '\n' | '\r'))
            .map(|ch| Self::from_char(ch).ok_or(InputError::UnmappedChar { ch }))
            .collect()
    }
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::DecimalPoint => f.write_str("."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::Backspace => f.write_str("⌫"),
            Self::ToggleSign => f.write_str("±"),
            Self::Unary(UnaryOp::Square) => f.write_str("x²"),
            Self::Unary(UnaryOp::SquareRoot) => f.write_str("√"),
            Self::Unary(UnaryOp::Reciprocal) => f.write_str("1/x"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(value: u8) -> Input {
        Input::Digit(Digit::new(value).unwrap())
    }

    #[test]
    fn digit_labels_map_to_digits() {
        for value in 0..=9u8 {
            assert_eq!(Input::from_label(&value.to_string()), Ok(digit(value)));
        }
    }

    #[test]
    fn operator_glyphs_and_ascii_agree() {
        assert_eq!(Input::from_label("−"), Input::from_label("-"));
        assert_eq!(Input::from_label("×"), Input::from_label("*"));
        assert_eq!(Input::from_label("÷"), Input::from_label("/"));
    }

    #[test]
    fn unknown_label_is_an_error() {
        assert_eq!(
            Input::from_label("M+"),
            Err(InputError::UnknownSymbol {
                label: "M+".to_string()
            })
        );
        assert!(Input::from_label("12").is_err());
        assert!(Input::from_label("").is_err());
    }

    #[test]
    fn labels_are_trimmed() {
        assert_eq!(" = ".parse::<Input>(), Ok(Input::Equals));
    }

    #[test]
    fn display_label_parses_back() {
        let inputs = [
            digit(7),
            Input::DecimalPoint,
            Input::Operator(BinaryOp::Add),
            Input::Operator(BinaryOp::Subtract),
            Input::Operator(BinaryOp::Multiply),
            Input::Operator(BinaryOp::Divide),
            Input::Operator(BinaryOp::Modulo),
            Input::Equals,
            Input::Clear,
            Input::Backspace,
            Input::ToggleSign,
            Input::Unary(UnaryOp::Square),
            Input::Unary(UnaryOp::SquareRoot),
            Input::Unary(UnaryOp::Reciprocal),
        ];

        for input in inputs {
            assert_eq!(Input::from_label(&input.to_string()), Ok(input));
        }
    }

    #[test]
    fn keyboard_bindings() {
        assert_eq!(Input::from_key(Key::Char('4')), Some(digit(4)));
        assert_eq!(
            Input::from_key(Key::Numpad(Digit::new(4).unwrap())),
            Some(digit(4))
        );
        assert_eq!(Input::from_key(Key::NumpadDecimal), Some(Input::DecimalPoint));
        assert_eq!(
            Input::from_key(Key::Char('+')),
            Some(Input::Operator(BinaryOp::Add))
        );
        assert_eq!(
            Input::from_key(Key::Char('/')),
            Some(Input::Operator(BinaryOp::Divide))
        );
        assert_eq!(Input::from_key(Key::Enter), Some(Input::Equals));
        assert_eq!(Input::from_key(Key::Backspace), Some(Input::Backspace));
        assert_eq!(Input::from_key(Key::Delete), Some(Input::Clear));
        assert_eq!(Input::from_key(Key::Char('S')), Some(Input::ToggleSign));
        assert_eq!(Input::from_key(Key::F9), Some(Input::ToggleSign));
        assert_eq!(
            Input::from_key(Key::Char('@')),
            Some(Input::Unary(UnaryOp::SquareRoot))
        );
    }

    #[test]
    fn typed_clear_and_delete() {
        assert_eq!(Input::from_char('c'), Some(Input::Clear));
        assert_eq!(Input::from_char('C'), Some(Input::Clear));
        assert_eq!(Input::from_char('\u{8}'), Some(Input::Backspace));
        assert_eq!(Input::from_char('\u{7f}'), Some(Input::Backspace));
        assert_eq!(
            Input::parse_sequence("12\u{7f}c"),
            Ok(vec![digit(1), digit(2), Input::Backspace, Input::Clear])
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(Input::from_key(Key::Char('z')), None);
        assert_eq!(Input::from_key(Key::Char(' ')), None);
    }

    #[test]
    fn sequences_skip_spaces() {
        let inputs = Input::parse_sequence("12 + 3 =").unwrap();
        assert_eq!(
            inputs,
            vec![
                digit(1),
                digit(2),
                Input::Operator(BinaryOp::Add),
                digit(3),
                Input::Equals
            ]
        );
    }

    #[test]
    fn sequences_reject_unbound_characters() {
        assert_eq!(
            Input::parse_sequence("2+x"),
            Err(InputError::UnmappedChar { ch: 'x' })
        );
    }

    #[test]
    fn input_serializes_correctly() {
        let input = Input::Operator(BinaryOp::Divide);
        let json = serde_json::to_string(&input).unwrap();
        let deserialized: Input = serde_json::from_str(&json).unwrap();
        assert_eq!(input, deserialized);
    }
}
