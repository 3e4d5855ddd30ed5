/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

const PLACEHOLDER: &str = "—";

/// Format a timestamp as DD/MM/YYYY
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y").to_string()
}

/// Format a timestamp as DD/MM/YYYY HH:MM
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Format an optional timestamp, falling back to a placeholder dash
pub fn format_date_opt(dt: &Option<DateTime<Utc>>) -> String {
    dt.as_ref().map(format_date).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Format an optional timestamp with time, falling back to a placeholder dash
pub fn format_datetime_opt(dt: &Option<DateTime<Utc>>) -> String {
    dt.as_ref()
        .map(format_datetime)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(&dt), "15/03/2024");
        assert_eq!(format_datetime(&dt), "15/03/2024 14:02");
    }

    #[test]
    fn test_format_opt_placeholder() {
        assert_eq!(format_date_opt(&None), "—");
        assert_eq!(format_datetime_opt(&None), "—");

        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date_opt(&Some(dt)), "31/12/2024");
    }
}
