//! Number formatting utilities for amounts shown in the UI

/// Formats a number with a thousands separator (comma) and the given number
/// of decimal places
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a comma every 3 digits from the end of the integer part
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

/// Formats a Naira amount with the currency sign and 2 decimal places
/// Example: 150000.0 -> "₦150,000.00"
pub fn format_ngn(value: f64) -> String {
    format!("₦{}", format_number_with_decimals(value, 2))
}

/// Formats an integer count with a thousands separator
pub fn format_count(value: i64) -> String {
    format_number_with_decimals(value as f64, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ngn() {
        assert_eq!(format_ngn(1234.56), "₦1,234.56");
        assert_eq!(format_ngn(150000.0), "₦150,000.00");
        assert_eq!(format_ngn(0.0), "₦0.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(-1234.56, 2), "-1,234.56");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(0), "0");
    }
}
