//! Timestamp display

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Format an ISO-8601 timestamp in local time, pt-BR layout.
///
/// Missing or unparseable input yields an empty string.
pub fn format_date(iso: Option<&str>) -> String {
    format_date_in(iso, &Local)
}

/// Same as [`format_date`] for an explicit time zone
pub fn format_date_in<Tz>(iso: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(iso) = iso.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let with_offset = DateTime::parse_from_rfc3339(iso)
        .or_else(|_| DateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f%z"));
    if let Ok(parsed) = with_offset {
        return parsed.with_timezone(tz).format(DISPLAY_FORMAT).to_string();
    }

    // Date-only values are midnight UTC
    if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return match date.and_hms_opt(0, 0, 0) {
            Some(midnight) => Utc
                .from_utc_datetime(&midnight)
                .with_timezone(tz)
                .format(DISPLAY_FORMAT)
                .to_string(),
            None => String::new(),
        };
    }

    // Offset-less timestamps are wall-clock time in the given zone
    let naive = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M"));

    match naive {
        Ok(naive) => match tz.from_local_datetime(&naive).earliest() {
            Some(local) => local.format(DISPLAY_FORMAT).to_string(),
            None => String::new(),
        },
        Err(_) => {
            tracing::debug!("Unparseable timestamp: {}", iso);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_utc_timestamp() {
        assert_eq!(
            format_date_in(Some("2024-01-15T10:30:05Z"), &Utc),
            "15/01/2024, 10:30:05"
        );
    }

    #[test]
    fn test_offset_conversion() {
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(
            format_date_in(Some("2024-01-15T10:30:05.123Z"), &brt),
            "15/01/2024, 07:30:05"
        );
    }

    #[test]
    fn test_offsetless_timestamp_is_local() {
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(
            format_date_in(Some("2024-01-15T10:30:05.5"), &brt),
            "15/01/2024, 10:30:05"
        );
    }

    #[test]
    fn test_basic_offset() {
        assert_eq!(
            format_date_in(Some("2025-11-15T20:35:01+0000"), &Utc),
            "15/11/2025, 20:35:01"
        );
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(
            format_date_in(Some("2025-11-15T20:35:01-0300"), &brt),
            "15/11/2025, 20:35:01"
        );
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        assert_eq!(
            format_date_in(Some("2025-11-15"), &Utc),
            "15/11/2025, 00:00:00"
        );
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(
            format_date_in(Some("2025-11-15"), &brt),
            "14/11/2025, 21:00:00"
        );
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(format_date_in(None, &Utc), "");
        assert_eq!(format_date_in(Some(""), &Utc), "");
        assert_eq!(format_date_in(Some("ontem"), &Utc), "");
    }
}
