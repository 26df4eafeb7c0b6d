//! Error types for the salary calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the calculator can report: rejected monetary inputs,
//! unparseable user input, and missing or inconsistent configuration.

use thiserror::Error;

/// The main error type for the salary calculator.
///
/// Calculations never recover from these errors themselves; they are
/// returned to the caller immediately and no partial breakdown is produced.
///
/// # Example
///
/// ```
/// use salary_calculator::error::CalculatorError;
///
/// let error = CalculatorError::OutOfRange {
///     parameter: "gross_package".to_string(),
///     message: "Gross package must be greater than zero.".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Gross package must be greater than zero. (parameter 'gross_package')"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// A monetary input was zero or negative.
    #[error("{message} (parameter '{parameter}')")]
    OutOfRange {
        /// The name of the offending parameter.
        parameter: String,
        /// A fixed human-readable description of the constraint.
        message: String,
    },

    /// An argument was not one of its allowed values.
    #[error("{message} (parameter '{parameter}')")]
    InvalidArgument {
        /// The name of the offending parameter.
        parameter: String,
        /// A description of what values are accepted.
        message: String,
    },

    /// Free-text input could not be parsed.
    #[error("{message} (input '{input}')")]
    InvalidFormat {
        /// The raw text that failed to parse.
        input: String,
        /// A description of the expected format.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required configuration section or setting is absent or unusable.
    #[error("Configuration section '{section}' is missing or invalid: {message}")]
    ConfigurationMissing {
        /// The configuration section at fault.
        section: String,
        /// A description of what is missing.
        message: String,
    },

    /// A configuration section violates a bracket-table invariant.
    #[error("Invalid configuration in section '{section}': {message}")]
    InvalidConfig {
        /// The configuration section at fault.
        section: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// An intermediate amount exceeded the range of `Decimal`.
    #[error("Arithmetic overflow while calculating {quantity}")]
    Overflow {
        /// The amount being calculated when the overflow occurred.
        quantity: String,
    },
}

impl CalculatorError {
    /// Builds an [`CalculatorError::OutOfRange`] for the given parameter.
    pub fn out_of_range(parameter: &str, message: &str) -> Self {
        Self::OutOfRange {
            parameter: parameter.to_string(),
            message: message.to_string(),
        }
    }

    /// Builds an [`CalculatorError::InvalidArgument`] for the given parameter.
    pub fn invalid_argument(parameter: &str, message: &str) -> Self {
        Self::InvalidArgument {
            parameter: parameter.to_string(),
            message: message.to_string(),
        }
    }

    /// Builds an [`CalculatorError::Overflow`] for the given quantity.
    pub fn overflow(quantity: &str) -> Self {
        Self::Overflow {
            quantity: quantity.to_string(),
        }
    }

    /// Returns `true` for errors caused by bad user input rather than
    /// by configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::InvalidArgument { .. } | Self::InvalidFormat { .. }
        )
    }
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_displays_parameter_and_message() {
        let error = CalculatorError::out_of_range(
            "taxable_income",
            "Taxable income must be greater than zero.",
        );
        assert_eq!(
            error.to_string(),
            "Taxable income must be greater than zero. (parameter 'taxable_income')"
        );
    }

    #[test]
    fn test_invalid_argument_displays_parameter_and_message() {
        let error = CalculatorError::invalid_argument("pay_frequency", "Invalid pay frequency.");
        assert_eq!(
            error.to_string(),
            "Invalid pay frequency. (parameter 'pay_frequency')"
        );
    }

    #[test]
    fn test_invalid_format_displays_input() {
        let error = CalculatorError::InvalidFormat {
            input: "abc".to_string(),
            message: "Invalid decimal format.".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid decimal format. (input 'abc')");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = CalculatorError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = CalculatorError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_configuration_missing_displays_section() {
        let error = CalculatorError::ConfigurationMissing {
            section: "salary_settings".to_string(),
            message: "section is absent".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration section 'salary_settings' is missing or invalid: section is absent"
        );
    }

    #[test]
    fn test_overflow_displays_quantity() {
        let error = CalculatorError::overflow("superannuation");
        assert_eq!(
            error.to_string(),
            "Arithmetic overflow while calculating superannuation"
        );
    }

    #[test]
    fn test_input_errors_are_classified() {
        assert!(CalculatorError::out_of_range("gross_package", "x").is_input_error());
        assert!(CalculatorError::invalid_argument("pay_frequency", "x").is_input_error());
        assert!(
            !CalculatorError::ConfigNotFound {
                path: "x".to_string()
            }
            .is_input_error()
        );
        assert!(!CalculatorError::overflow("income tax").is_input_error());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CalculatorError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_out_of_range() -> CalculatorResult<()> {
            Err(CalculatorError::out_of_range("gross_package", "negative"))
        }

        fn propagates_error() -> CalculatorResult<()> {
            returns_out_of_range()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
