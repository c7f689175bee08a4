//! The entry buffer.
//!
//! What the user sees is what is stored: the number under construction is
//! kept as text and only parsed when a computation needs it.

use super::error::CalcError;
use super::format::format_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decimal digit, `0..=9`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, or `None` if `value` is above nine.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Create a digit from an ASCII character.
    ///
    /// ```rust
    /// use keycalc::engine::Digit;
    ///
    /// assert_eq!(Digit::from_char('7').map(|d| d.value()), Some(7));
    /// assert!(Digit::from_char('x').is_none());
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{value} is not a decimal digit"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Text of the number being typed or the most recent result.
///
/// Always a valid decimal numeral or `"0"`, never empty.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Entry {
    text: String,
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

impl Entry {
    const ZERO: &'static str = "0";
    const DECIMAL_POINT: char = '.';
    const MINUS: char = '-';

    /// A fresh `"0"` entry.
    pub fn new() -> Self {
        Self {
            text: Self::ZERO.to_string(),
        }
    }

    /// Entry holding a formatted computation result.
    pub fn from_value(value: f64, precision: usize) -> Self {
        Self {
            text: format_number(value, precision),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_zero(&self) -> bool {
        self.text == Self::ZERO
    }

    pub fn has_decimal_point(&self) -> bool {
        self.text.contains(Self::DECIMAL_POINT)
    }

    pub fn is_negative(&self) -> bool {
        self.text.starts_with(Self::MINUS)
    }

    /// Number of digit characters, ignoring sign and decimal point.
    pub fn digit_count(&self) -> usize {
        self.text.chars().filter(char::is_ascii_digit).count()
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push_str(Self::ZERO);
    }

    /// Append `digit`, collapsing a lone leading zero.
    ///
    /// Returns `false` when the entry already holds `max_digits` digits and
    /// the digit was dropped.
    pub fn push_digit(&mut self, digit: Digit, max_digits: usize) -> bool {
        if self.is_zero() {
            self.text.clear();
            self.text.push(digit.as_char());
            return true;
        }

        if self.digit_count() >= max_digits {
            return false;
        }

        self.text.push(digit.as_char());
        true
    }

    /// Append a decimal point unless the entry already has one.
    pub fn push_decimal_point(&mut self) -> bool {
        if self.has_decimal_point() {
            return false;
        }
        self.text.push(Self::DECIMAL_POINT);
        true
    }

    /// Remove the last character. A bare sign, `"-0"` or nothing left
    /// becomes `"0"`.
    pub fn backspace(&mut self) {
        self.text.pop();
        if self.text.is_empty() || self.text == "-" || self.text == "-0" {
            self.reset();
        }
    }

    /// Add or strip a leading minus. `"0"` stays unsigned.
    pub fn toggle_sign(&mut self) {
        if self.is_zero() {
            return;
        }
        if self.is_negative() {
            self.text.remove(0);
        } else {
            self.text.insert(0, Self::MINUS);
        }
    }

    /// Parse the entry as a finite number.
    pub fn value(&self) -> Result<f64, CalcError> {
        match self.text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CalcError::Parse {
                text: self.text.clone(),
            }),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
