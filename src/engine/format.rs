//! Result formatting.
//!
//! Results are printed in a general format: the shortest digits that read
//! back as the same `f64`, capped at a number of significant digits,
//! positional notation for moderate exponents and `d.dddE+XX` otherwise.

/// Significant digits used when no configuration overrides it. Every `f64`
/// fits in this many, so default results read back exactly.
pub const DEFAULT_PRECISION: usize = MAX_PRECISION;

/// Largest precision accepted. Seventeen significant digits are enough to
/// reproduce any `f64` exactly.
pub const MAX_PRECISION: usize = 17;

/// Smallest decimal exponent still printed positionally.
const MIN_POSITIONAL_EXPONENT: i32 = -4;

/// Format `value` with at most `precision` significant digits.
///
/// The shortest representation that parses back to `value` is used when it
/// fits; otherwise the value is rounded to `precision` digits, as with
/// .NET's `G15` at a precision of 15. Zero, including negative zero, is
/// always `"0"`. The output always parses with `str::parse::<f64>`.
///
/// # Example
///
/// ```rust
/// use keycalc::engine::{format_number, DEFAULT_PRECISION};
///
/// assert_eq!(format_number(20.0, DEFAULT_PRECISION), "20");
/// assert_eq!(format_number(1.0 / 3.0, DEFAULT_PRECISION), "0.3333333333333333");
/// assert_eq!(format_number(0.1 + 0.2, 15), "0.3");
/// assert_eq!(format_number(1e20, DEFAULT_PRECISION), "1E+20");
/// assert_eq!(format_number(-0.00001, DEFAULT_PRECISION), "-1E-05");
/// ```
pub fn format_number(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.clamp(1, MAX_PRECISION);
    let Some((digits, exponent)) = significant_digits(value, precision) else {
        return format!("{value:e}");
    };

    let body = if exponent >= MIN_POSITIONAL_EXPONENT && exponent < precision as i32 {
        positional(&digits, exponent)
    } else {
        exponential(&digits, exponent)
    };

    if value.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

/// Significant digits of `value` without trailing zeros, and its decimal
/// exponent.
fn significant_digits(value: f64, precision: usize) -> Option<(String, i32)> {
    let shortest = split_scientific(&format!("{value:e}"))?;
    if shortest.0.len() <= precision {
        return Some(shortest);
    }
    split_scientific(&format!("{:.*e}", precision - 1, value))
}

fn split_scientific(scientific: &str) -> Option<(String, i32)> {
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent = exponent.parse::<i32>().ok()?;
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    Some((digits.trim_end_matches('0').to_string(), exponent))
}

fn positional(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{digits}");
    }

    let integer_len = exponent as usize + 1;
    if digits.len() <= integer_len {
        let zeros = "0".repeat(integer_len - digits.len());
        format!("{digits}{zeros}")
    } else {
        let (integer, fraction) = digits.split_at(integer_len);
        format!("{integer}.{fraction}")
    }
}

fn exponential(digits: &str, exponent: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let sign = if exponent < 0 { '-' } else { '+' };
    let magnitude = exponent.unsigned_abs();
    if rest.is_empty() {
        format!("{lead}E{sign}{magnitude:02}")
    } else {
        format!("{lead}.{rest}E{sign}{magnitude:02}")
    }
}
