//! Number formatting for tables and cards

/// Currency sign prefixed to every amount
pub const CURRENCY_SIGN: &str = "₦";

/// Formats a number with a thousands separator (comma) and the given decimals
///
/// # Examples
///
/// ```rust,ignore
/// # use admin_console::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals.min(3) as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Amount with 2 decimals and thousands separator
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Amount with the currency sign, e.g. "₦12,500.00"
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-{}{}", CURRENCY_SIGN, format_money(-value))
    } else {
        format!("{}{}", CURRENCY_SIGN, format_money(value))
    }
}

/// Whole number with thousands separator
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.89), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1,234.56");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(12500.0), "₦12,500.00");
        assert_eq!(format_currency(-5.5), "-₦5.50");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-123.0), "-123");
    }
}
