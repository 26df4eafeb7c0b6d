//! Parsing of free-text user input.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{CalculatorError, CalculatorResult};

/// Parses a gross salary package typed by the user.
///
/// Surrounding whitespace, a leading `$` and comma digit grouping are
/// accepted. Range checks are left to the calculator.
///
/// # Examples
///
/// ```
/// use salary_calculator::input::parse_gross_package;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_gross_package(" $65,000 ").unwrap(), Decimal::from(65000));
/// assert!(parse_gross_package("sixty").is_err());
/// ```
pub fn parse_gross_package(text: &str) -> CalculatorResult<Decimal> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = unsigned.chars().filter(|c| *c != ',').collect();

    Decimal::from_str(&cleaned).map_err(|_| CalculatorError::InvalidFormat {
        input: text.trim().to_string(),
        message: "Invalid decimal format.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parses_plain_number() {
        assert_eq!(parse_gross_package("65000").unwrap(), dec("65000"));
        assert_eq!(parse_gross_package("123456.78").unwrap(), dec("123456.78"));
    }

    #[test]
    fn test_parses_currency_formatting() {
        assert_eq!(parse_gross_package("$200,000.00").unwrap(), dec("200000"));
        assert_eq!(parse_gross_package("  1,000 \n").unwrap(), dec("1000"));
    }

    #[test]
    fn test_keeps_negative_values_for_range_check() {
        assert_eq!(parse_gross_package("-50000").unwrap(), dec("-50000"));
    }

    #[test]
    fn test_rejects_non_numeric_input() {
        for text in ["", "abc", "12a", "$"] {
            match parse_gross_package(text) {
                Err(CalculatorError::InvalidFormat { message, .. }) => {
                    assert_eq!(message, "Invalid decimal format.");
                }
                other => panic!("Expected InvalidFormat for {:?}, got {:?}", text, other),
            }
        }
    }
}
