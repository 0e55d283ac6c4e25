//! Tests for time-of-day parsing and the business-hours predicate.

use slot_engine::error::SlotError;
use slot_engine::time::{is_business_hours, TimeOfDay};

#[test]
fn strict_parse_accepts_quarter_hour_minutes() {
    for text in ["00:00", "08:15", "12:30", "23:45"] {
        let time = TimeOfDay::parse(text).unwrap();
        assert_eq!(time.to_string(), text);
    }
}

#[test]
fn strict_parse_rejects_off_grid_minutes() {
    let err = TimeOfDay::parse("09:20").unwrap_err();
    assert!(matches!(err, SlotError::OutOfRange(_)), "got {err:?}");
}

#[test]
fn lenient_parse_accepts_any_minute() {
    let time = TimeOfDay::parse_lenient("16:59").unwrap();
    assert_eq!(time.hour(), 16);
    assert_eq!(time.minute(), 59);
    assert_eq!(time.minutes_from_midnight(), 1019);
}

#[test]
fn parse_rejects_malformed_text() {
    for text in ["", "0900", "ab:cd", "09:", ":30", "09:00:00"] {
        let err = TimeOfDay::parse_lenient(text).unwrap_err();
        assert!(
            matches!(err, SlotError::InvalidFormat(_)),
            "{text:?} gave {err:?}"
        );
    }
}

#[test]
fn parse_rejects_out_of_day_components() {
    // 24:00 is an end-bound-only text; it is not a time of day.
    for text in ["24:00", "12:60", "-1:00", "99:99"] {
        let err = TimeOfDay::parse_lenient(text).unwrap_err();
        assert!(
            matches!(err, SlotError::OutOfRange(_)),
            "{text:?} gave {err:?}"
        );
    }
}

#[test]
fn single_digit_hour_parses_and_zero_pads() {
    let time = TimeOfDay::parse("9:00").unwrap();
    assert_eq!(time.to_string(), "09:00");
}

#[test]
fn business_hours_boundaries() {
    // 08:00 through 16:59 inclusive; 07:59 and 17:00 are outside.
    assert!(!is_business_hours("07:59").unwrap());
    assert!(is_business_hours("08:00").unwrap());
    assert!(is_business_hours("16:59").unwrap());
    assert!(!is_business_hours("17:00").unwrap());
}

#[test]
fn business_hours_errors_on_malformed_input() {
    assert!(is_business_hours("noon").is_err());
}
