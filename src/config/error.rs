//! Configuration errors.

use thiserror::Error;

/// A single rule broken by an [`EngineConfig`](super::EngineConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Error marker must not be empty")]
    EmptyErrorMarker,

    #[error("Error marker '{marker}' reads as a number")]
    NumericErrorMarker { marker: String },

    #[error("Precision {value} is outside {min}..={max}")]
    PrecisionOutOfRange { value: usize, min: usize, max: usize },

    #[error("Max digits {value} is outside {min}..={max}")]
    MaxDigitsOutOfRange { value: usize, min: usize, max: usize },
}

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigViolation>),

    #[error("Configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_lists_every_violation() {
        let error = BuildError::InvalidConfig(vec![
            ConfigViolation::EmptyErrorMarker,
            ConfigViolation::PrecisionOutOfRange {
                value: 0,
                min: 1,
                max: 17,
            },
        ]);

        assert_eq!(
            error.to_string(),
            "Invalid configuration: Error marker must not be empty; Precision 0 is outside 1..=17"
        );
    }
}
