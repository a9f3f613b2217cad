//! Date/time formatting for feed timestamps.

use chrono::{DateTime, Utc};

/// Format a server timestamp as "DD.MM.YYYY HH:MM".
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "15.03.2024 14:02");
    }

    #[test]
    fn test_format_datetime_pads_components() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 1, 9, 5, 59).unwrap();
        assert_eq!(format_datetime(&dt), "01.12.2024 09:05");
    }
}
