use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp cell. Date-only values resolve to midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Parse a calendar date given on the command line or in the environment
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_accepted_formats() {
        let full = parse_timestamp("2018-01-18 23:09:36").unwrap();
        assert_eq!((full.year(), full.month(), full.day()), (2018, 1, 18));
        assert_eq!(full.second(), 36);

        assert!(parse_timestamp("2018-01-18T23:09:36").is_some());
        assert!(parse_timestamp("2018-01-18 23:09").is_some());
        assert!(parse_timestamp("2018-01-18 23:09:36.250").is_some());

        let date_only = parse_timestamp("2018-01-18").unwrap();
        assert_eq!(date_only.hour(), 0);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_timestamp("18/01/2018").is_none());
        assert!(parse_timestamp("2018-13-01").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_date("2018-02-30").is_none());
    }
}
