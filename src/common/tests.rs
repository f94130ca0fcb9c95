#[cfg(test)]
mod common_tests {
    use chrono::{TimeZone, Utc};
    use crate::common::common::{add_months, format_timestamp, parse_log_level};
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_log_level_known() {
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
        assert_eq!(parse_log_level("trace").unwrap(), log::LevelFilter::Trace);
        assert_eq!(parse_log_level("debug").unwrap(), log::LevelFilter::Debug);
        assert_eq!(parse_log_level("info").unwrap(), log::LevelFilter::Info);
        assert_eq!(parse_log_level("warn").unwrap(), log::LevelFilter::Warn);
        assert_eq!(parse_log_level("error").unwrap(), log::LevelFilter::Error);
    }

    #[test]
    fn test_parse_log_level_unknown() {
        let err = parse_log_level("verbose").unwrap_err();
        assert!(err.to_string().contains("verbose"));
        assert!(parse_log_level("INFO").is_err());
    }

    #[test]
    fn test_add_months_simple() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let later = add_months(at, 3).unwrap();
        assert_eq!(later, Utc.with_ymd_and_hms(2025, 4, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_add_months_clamps_day() {
        let at = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap();
        let later = add_months(at, 1).unwrap();
        assert_eq!(later, Utc.with_ymd_and_hms(2025, 2, 28, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_add_months_zero() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(add_months(at, 0).unwrap(), at);
    }

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&at), "2030-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_custom_error_display() {
        let err = CustomError::new("something broke");
        assert_eq!(err.to_string(), "something broke");
        assert_eq!(err.message(), "something broke");
    }
}
