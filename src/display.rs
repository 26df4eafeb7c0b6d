//! Console rendering of salary breakdowns.

use rust_decimal::Decimal;

use crate::calculation::{MONEY_DECIMAL_PLACES, round_money};
use crate::models::SalaryBreakdown;

/// Formats an amount as dollars with comma grouping and two decimals.
///
/// # Examples
///
/// ```
/// use salary_calculator::display::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("123467.4").unwrap()), "$123,467.40");
/// assert_eq!(format_currency(Decimal::from_str("-12.5").unwrap()), "-$12.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(MONEY_DECIMAL_PLACES);

    let text = rounded.abs().to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Renders the eight fields of a breakdown as labelled currency lines.
pub fn render_breakdown(breakdown: &SalaryBreakdown) -> String {
    let lines = [
        format!("Gross Package: {}", format_currency(breakdown.gross_package)),
        format!(
            "Superannuation: {}",
            format_currency(breakdown.super_contribution)
        ),
        String::new(),
        format!(
            "Taxable Income: {}",
            format_currency(breakdown.taxable_income)
        ),
        String::new(),
        "Deductions:".to_string(),
        format!("Medicare Levy: {}", format_currency(breakdown.medicare_levy)),
        format!(
            "Budget Repair Levy: {}",
            format_currency(breakdown.budget_repair_levy)
        ),
        format!("Income Tax: {}", format_currency(breakdown.income_tax)),
        String::new(),
        format!("Net Income: {}", format_currency(breakdown.net_income)),
        format!(
            "Pay Packet Amount: {}",
            format_currency(breakdown.pay_packet_amount)
        ),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_currency(dec("65000")), "$65,000.00");
        assert_eq!(format_currency(dec("1234567.891")), "$1,234,567.89");
        assert_eq!(format_currency(dec("100000")), "$100,000.00");
    }

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_currency(dec("0")), "$0.00");
        assert_eq!(format_currency(dec("0.08")), "$0.08");
        assert_eq!(format_currency(dec("999.9")), "$999.90");
    }

    #[test]
    fn test_format_negative_amount() {
        assert_eq!(format_currency(dec("-1234.5")), "-$1,234.50");
    }

    #[test]
    fn test_format_rounds_unrounded_amounts() {
        assert_eq!(
            format_currency(dec("59360.730593607305936073059")),
            "$59,360.73"
        );
    }

    #[test]
    fn test_render_breakdown_order_and_grouping() {
        let breakdown = SalaryBreakdown {
            gross_package: dec("200000"),
            super_contribution: dec("17351.60"),
            taxable_income: dec("182648.4018264840182648401826"),
            medicare_levy: dec("3653.00"),
            budget_repair_levy: dec("52.00"),
            income_tax: dec("55476.00"),
            net_income: dec("123467.40"),
            pay_packet_amount: dec("4748.75"),
        };

        let expected = "Gross Package: $200,000.00\n\
                        Superannuation: $17,351.60\n\
                        \n\
                        Taxable Income: $182,648.40\n\
                        \n\
                        Deductions:\n\
                        Medicare Levy: $3,653.00\n\
                        Budget Repair Levy: $52.00\n\
                        Income Tax: $55,476.00\n\
                        \n\
                        Net Income: $123,467.40\n\
                        Pay Packet Amount: $4,748.75";

        assert_eq!(render_breakdown(&breakdown), expected);
    }
}
