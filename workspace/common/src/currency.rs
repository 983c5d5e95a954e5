//! Rupee display formatting.

use rust_decimal::Decimal;
use rusty_money::{iso, Formatter, Money, Params};

/// Formats an amount as Indian Rupees for display: Indian digit grouping,
/// rounded to whole rupees, no paise. `150000` renders as `"₹1,50,000"`.
pub fn format_inr(value: &Decimal) -> String {
    let money = Money::from_decimal(*value, iso::INR);
    let params = Params {
        symbol: Some("₹"),
        separator_pattern: vec![3, 2, 2],
        rounding: Some(0),
        ..Default::default()
    };
    Formatter::money(&money, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_lakh_grouping() {
        assert_eq!(format_inr(&Decimal::from(150_000)), "₹1,50,000");
    }

    #[test]
    fn test_crore_grouping() {
        assert_eq!(format_inr(&Decimal::from(12_345_678)), "₹1,23,45,678");
    }

    #[test]
    fn test_small_amount_has_no_separator() {
        assert_eq!(format_inr(&Decimal::from(500)), "₹500");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_inr(&Decimal::ZERO), "₹0");
    }

    #[test]
    fn test_fractional_rupees_round_to_whole() {
        assert_eq!(format_inr(&Decimal::from_str("999.60").unwrap()), "₹1,000");
        assert_eq!(format_inr(&Decimal::from_str("1200.20").unwrap()), "₹1,200");
    }
}
