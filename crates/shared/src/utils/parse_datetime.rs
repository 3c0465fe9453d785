use chrono::{DateTime, Utc};

/// Parses an RFC 3339 date-time from a path or query parameter.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        None
    } else {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_datetime("2024-01-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(parse_datetime("").is_none());
        assert!(parse_datetime("2024-01-01").is_none());
        assert!(parse_datetime("not a date").is_none());
    }
}
