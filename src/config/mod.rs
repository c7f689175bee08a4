//! Engine configuration.
//!
//! Configuration is plain data (`EngineConfig`), loadable from JSON and
//! assembled with a fluent builder. Validation uses Stillwater's
//! `Validation` type so every broken rule is reported in a single pass.
//!
//! # Example
//!
//! ```rust
//! use keycalc::config::{BuildError, CalculatorBuilder};
//!
//! let result = CalculatorBuilder::new()
//!     .error_marker("")
//!     .precision(0)
//!     .build();
//!
//! match result {
//!     Err(BuildError::InvalidConfig(violations)) => assert_eq!(violations.len(), 2),
//!     _ => panic!("expected both violations"),
//! }
//! ```

pub mod builder;
pub mod error;
pub mod rules;
pub mod settings;

pub use builder::CalculatorBuilder;
pub use error::{BuildError, ConfigViolation};
pub use settings::{ConsecutiveOperators, EngineConfig, EqualsPolicy};
