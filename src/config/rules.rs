//! Validation rules for engine configuration.
//!
//! Every rule runs on every check so a bad configuration reports all of its
//! problems at once.

use super::error::ConfigViolation;
use super::settings::EngineConfig;
use crate::engine::MAX_PRECISION;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Bounds for the entry digit limit.
pub const MIN_DIGITS: usize = 1;
pub const MAX_DIGITS: usize = 64;

/// Lowest accepted formatting precision.
pub const MIN_PRECISION: usize = 1;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Validate `config`, accumulating every violation.
pub fn validate(config: &EngineConfig) -> Check {
    let checks: Vec<Check> = vec![
        error_marker(&config.error_marker),
        in_range(config.precision, MIN_PRECISION, MAX_PRECISION, |value, min, max| {
            ConfigViolation::PrecisionOutOfRange { value, min, max }
        }),
        in_range(config.max_digits, MIN_DIGITS, MAX_DIGITS, |value, min, max| {
            ConfigViolation::MaxDigitsOutOfRange { value, min, max }
        }),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn error_marker(marker: &str) -> Check {
    if marker.trim().is_empty() {
        Validation::fail(ConfigViolation::EmptyErrorMarker)
    } else if marker.trim().parse::<f64>().is_ok() {
        // A numeric marker could not be told apart from a result.
        Validation::fail(ConfigViolation::NumericErrorMarker {
            marker: marker.to_string(),
        })
    } else {
        Validation::success(())
    }
}

fn in_range<F>(value: usize, min: usize, max: usize, violation: F) -> Check
where
    F: Fn(usize, usize, usize) -> ConfigViolation,
{
    if (min..=max).contains(&value) {
        Validation::success(())
    } else {
        Validation::fail(violation(value, min, max))
    }
}
