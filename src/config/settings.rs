//! Engine configuration values.

use super::error::{BuildError, ConfigViolation};
use super::rules;
use crate::engine::DEFAULT_PRECISION;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// What a second Equals press does when no operator was pressed since the
/// last one.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualsPolicy {
    /// Nothing; the result stays on the display.
    #[default]
    Idle,

    /// Apply the last operator and right operand to the result again.
    RepeatLast,
}

/// What an operator press does directly after another operator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsecutiveOperators {
    /// Compute the pending operation with the displayed value as the right
    /// operand, then hold the new operator.
    #[default]
    Evaluate,

    /// Swap the pending operator for the new one.
    Replace,
}

/// Settings for a [`Calculator`](crate::engine::Calculator).
///
/// Missing fields take their defaults when loaded from JSON.
///
/// # Example
///
/// ```rust
/// use keycalc::config::{EngineConfig, EqualsPolicy};
///
/// let config = EngineConfig::from_json(r#"{ "equals_policy": "repeat_last" }"#).unwrap();
///
/// assert_eq!(config.equals_policy, EqualsPolicy::RepeatLast);
/// assert_eq!(config.error_marker, "Error");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Text displayed while the engine is in its error phase.
    pub error_marker: String,

    /// Significant digits of formatted results.
    pub precision: usize,

    /// Digits accepted in a typed entry.
    pub max_digits: usize,

    pub equals_policy: EqualsPolicy,

    pub consecutive_operators: ConsecutiveOperators,

    /// Transitions kept by a session history; 0 disables recording.
    pub history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            error_marker: "Error".to_string(),
            precision: DEFAULT_PRECISION,
            max_digits: 16,
            equals_policy: EqualsPolicy::default(),
            consecutive_operators: ConsecutiveOperators::default(),
            history_limit: 256,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Return the configuration if every rule holds, otherwise all
    /// violations.
    pub fn validated(self) -> Result<Self, BuildError> {
        match rules::validate(&self) {
            Validation::Success(()) => Ok(self),
            Validation::Failure(violations) => Err(BuildError::InvalidConfig(
                violations.iter().cloned().collect::<Vec<ConfigViolation>>(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pocket_calculator() {
        let config = EngineConfig::default();
        assert_eq!(config.error_marker, "Error");
        assert_eq!(config.precision, 17);
        assert_eq!(config.equals_policy, EqualsPolicy::Idle);
        assert_eq!(config.consecutive_operators, ConsecutiveOperators::Evaluate);
    }

    #[test]
    fn empty_json_gives_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn json_overrides_fields() {
        let config = EngineConfig::from_json(
            r#"{
                "error_marker": "E",
                "precision": 10,
                "consecutive_operators": "replace",
                "history_limit": 0
            }"#,
        )
        .unwrap();

        assert_eq!(config.error_marker, "E");
        assert_eq!(config.precision, 10);
        assert_eq!(config.consecutive_operators, ConsecutiveOperators::Replace);
        assert_eq!(config.history_limit, 0);
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = EngineConfig::from_json("{ precision: }");
        assert!(matches!(result, Err(BuildError::Json(_))));
    }

    #[test]
    fn invalid_values_are_reported_together() {
        let result = EngineConfig::from_json(r#"{ "error_marker": "", "max_digits": 0 }"#);

        match result {
            Err(BuildError::InvalidConfig(violations)) => assert_eq!(violations.len(), 2),
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn config_serializes_correctly() {
        let config = EngineConfig {
            equals_policy: EqualsPolicy::RepeatLast,
            ..EngineConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"repeat_last\""));
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
