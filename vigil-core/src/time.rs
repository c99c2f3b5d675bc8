//! Time-of-day markers and arithmetic
//!
//! The clock compares times as short digit strings: "HHMM" for the minute a
//! time falls in and "HHMMSS" for its second. Markers are only ever compared
//! for equality. The minute marker doubles as the 4-character string shown
//! on the display.

use core::fmt::Write;

use chrono::{NaiveTime, ParseError, TimeDelta, Timelike};
use heapless::String;

/// "HHMM"
pub type MinuteMarker = String<4>;

/// "HHMMSS"
pub type SecondMarker = String<6>;

/// Format a time as its minute marker
pub fn minute_marker(time: &NaiveTime) -> MinuteMarker {
    let mut marker = MinuteMarker::new();
    // Two zero-padded fields always fill exactly four bytes
    let _ = write!(marker, "{:02}{:02}", time.hour(), time.minute());
    marker
}

/// Format a time as its second marker
pub fn second_marker(time: &NaiveTime) -> SecondMarker {
    let mut marker = SecondMarker::new();
    let _ = write!(
        marker,
        "{:02}{:02}{:02}",
        time.hour(),
        time.minute(),
        time.second()
    );
    marker
}

/// Parse an "HH:MM" time of day
pub fn parse_hh_mm(s: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
}

/// Parse an "HH:MM:SS" time of day
pub fn parse_hh_mm_ss(s: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M:%S")
}

/// Shift a time of day by whole minutes, wrapping through midnight
pub fn add_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    let (shifted, _days) = time.overflowing_add_signed(TimeDelta::minutes(minutes));
    shifted
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_markers_are_zero_padded() {
        let t = NaiveTime::from_hms_opt(7, 5, 9).unwrap();
        assert_eq!(minute_marker(&t).as_str(), "0705");
        assert_eq!(second_marker(&t).as_str(), "070509");

        let midnight = hm(0, 0);
        assert_eq!(minute_marker(&midnight).as_str(), "0000");
        assert_eq!(second_marker(&midnight).as_str(), "000000");
    }

    #[test]
    fn test_add_minutes_wraps_midnight() {
        assert_eq!(add_minutes(hm(23, 59), 1), hm(0, 0));
        assert_eq!(add_minutes(hm(0, 0), -1), hm(23, 59));
        assert_eq!(add_minutes(hm(6, 59), 1), hm(7, 0));
    }

    #[test]
    fn test_parse_hh_mm() {
        assert_eq!(parse_hh_mm("07:00").unwrap(), hm(7, 0));
        assert_eq!(parse_hh_mm(" 23:59 ").unwrap(), hm(23, 59));
        assert!(parse_hh_mm("24:00").is_err());
        assert!(parse_hh_mm("").is_err());
    }

    #[test]
    fn test_parse_reports_trailing_input() {
        let err = parse_hh_mm("9:30am").unwrap_err();
        assert_eq!(err.to_string(), "trailing input");
    }

    #[test]
    fn test_parse_hh_mm_ss() {
        let t = parse_hh_mm_ss("12:34:56").unwrap();
        assert_eq!(second_marker(&t).as_str(), "123456");
        assert!(parse_hh_mm_ss("12:34").is_err());
    }

    proptest! {
        #[test]
        fn prop_increment_then_decrement_is_identity(h in 0u32..24, m in 0u32..60) {
            let t = hm(h, m);
            prop_assert_eq!(add_minutes(add_minutes(t, 1), -1), t);
        }

        #[test]
        fn prop_minute_marker_matches_fields(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
            let t = NaiveTime::from_hms_opt(h, m, s).unwrap();
            let marker = minute_marker(&t);
            prop_assert_eq!(marker.len(), 4);
            prop_assert_eq!(&second_marker(&t)[..4], marker.as_str());
        }
    }
}
