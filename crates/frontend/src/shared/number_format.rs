//! Number formatting for the cost display

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Groups the digits of an integer by thousands with `separator`
pub fn format_thousands(n: i64, separator: char) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Whole-dollar amount in US format
///
/// ```ignore
/// assert_eq!(format_usd(Decimal::from(3285)), "$3,285");
/// ```
pub fn format_usd(amount: Decimal) -> String {
    let dollars = amount.round().to_i64().unwrap_or_default();
    format!("${}", format_thousands(dollars, ','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0, ','), "0");
        assert_eq!(format_thousands(999, ','), "999");
        assert_eq!(format_thousands(1000, ','), "1,000");
        assert_eq!(format_thousands(1234567, ','), "1,234,567");
        assert_eq!(format_thousands(-1234, ','), "-1,234");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Decimal::from(600)), "$600");
        assert_eq!(format_usd(Decimal::from(3285)), "$3,285");
        assert_eq!(format_usd(Decimal::from(12000)), "$12,000");
    }
}
