//! Builder for constructing calculators.

use super::error::BuildError;
use super::settings::{ConsecutiveOperators, EngineConfig, EqualsPolicy};
use crate::engine::Calculator;

/// Builder for configuring a [`Calculator`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use keycalc::config::{CalculatorBuilder, EqualsPolicy};
///
/// let calculator = CalculatorBuilder::new()
///     .error_marker("E")
///     .equals_policy(EqualsPolicy::RepeatLast)
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.display(), "0");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: EngineConfig,
}

impl CalculatorBuilder {
    /// Create a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn error_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.error_marker = marker.into();
        self
    }

    pub fn precision(mut self, digits: usize) -> Self {
        self.config.precision = digits;
        self
    }

    pub fn max_digits(mut self, digits: usize) -> Self {
        self.config.max_digits = digits;
        self
    }

    pub fn equals_policy(mut self, policy: EqualsPolicy) -> Self {
        self.config.equals_policy = policy;
        self
    }

    pub fn consecutive_operators(mut self, behavior: ConsecutiveOperators) -> Self {
        self.config.consecutive_operators = behavior;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Validate and return the configuration.
    pub fn build_config(self) -> Result<EngineConfig, BuildError> {
        self.config.validated()
    }

    /// Build the calculator.
    /// Returns every violated rule if the configuration is invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        Calculator::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;

    #[test]
    fn default_builder_builds() {
        let calculator = CalculatorBuilder::new().build().unwrap();
        assert_eq!(calculator.config(), &EngineConfig::default());
    }

    #[test]
    fn fluent_api_sets_every_field() {
        let config = CalculatorBuilder::new()
            .error_marker("Oops")
            .precision(12)
            .max_digits(10)
            .equals_policy(EqualsPolicy::RepeatLast)
            .consecutive_operators(ConsecutiveOperators::Replace)
            .history_limit(8)
            .build_config()
            .unwrap();

        assert_eq!(config.error_marker, "Oops");
        assert_eq!(config.precision, 12);
        assert_eq!(config.max_digits, 10);
        assert_eq!(config.equals_policy, EqualsPolicy::RepeatLast);
        assert_eq!(config.consecutive_operators, ConsecutiveOperators::Replace);
        assert_eq!(config.history_limit, 8);
    }

    #[test]
    fn builder_validates_fields() {
        let result = CalculatorBuilder::new().precision(40).build();

        match result {
            Err(BuildError::InvalidConfig(violations)) => {
                assert_eq!(
                    violations,
                    vec![ConfigViolation::PrecisionOutOfRange {
                        value: 40,
                        min: 1,
                        max: 17
                    }]
                );
            }
            other => panic!("Expected InvalidConfig, got {:?}", other.map(|_| ())),
        }
    }
}
