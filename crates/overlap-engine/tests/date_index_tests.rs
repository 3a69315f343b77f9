//! Tests for calendar arithmetic.

use overlap_engine::date_index::{
    days_in_month, first_weekday_offset, is_leap_year, iso_date, month_index_from_number,
    parse_iso_date,
};
use overlap_engine::OverlapError;

#[test]
fn days_in_month_for_a_common_year() {
    let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for (month_index, days) in expected.iter().enumerate() {
        assert_eq!(days_in_month(2025, month_index as u32), *days);
    }
}

#[test]
fn leap_years_follow_the_gregorian_rule() {
    assert!(is_leap_year(2024));
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2026));
    assert_eq!(days_in_month(2024, 1), 29);
    assert_eq!(days_in_month(2100, 1), 28);
}

#[test]
fn iso_date_is_one_based_and_zero_padded() {
    assert_eq!(iso_date(2026, 2, 9), "2026-03-09");
    assert_eq!(iso_date(2026, 9, 10), "2026-10-10");
}

#[test]
fn first_weekday_offset_is_monday_based() {
    // 2024-01-01 was a Monday, 2026-01-01 a Thursday, 2026-03-01 a Sunday.
    assert_eq!(first_weekday_offset(2024, 0), 0);
    assert_eq!(first_weekday_offset(2026, 0), 3);
    assert_eq!(first_weekday_offset(2026, 2), 6);
    assert_eq!(first_weekday_offset(2025, 1), 5);
}

#[test]
#[should_panic(expected = "out of range")]
fn iso_date_rejects_month_index_twelve() {
    iso_date(2026, 12, 1);
}

#[test]
fn month_numbers_convert_to_indices() {
    assert_eq!(month_index_from_number(1).unwrap(), 0);
    assert_eq!(month_index_from_number(12).unwrap(), 11);
    assert!(matches!(
        month_index_from_number(0),
        Err(OverlapError::InvalidMonth(0))
    ));
    assert!(matches!(
        month_index_from_number(13),
        Err(OverlapError::InvalidMonth(13))
    ));
}

#[test]
fn parse_iso_date_returns_month_index() {
    assert_eq!(parse_iso_date("2026-03-10").unwrap(), (2026, 2, 10));
    assert!(matches!(
        parse_iso_date("2026-02-30"),
        Err(OverlapError::InvalidDate(_))
    ));
    assert!(parse_iso_date("March 10").is_err());
}
