//! Pure calendar arithmetic over naive dates.
//!
//! Months are addressed by a zero-based index (`0` = January) everywhere inside
//! the engine. Functions here assert on out-of-range month indices: they are
//! called with caller-constructed values, never with raw user input. Use
//! [`month_index_from_number`] to convert a user-facing one-based month first.

use chrono::{Datelike, NaiveDate};

use crate::error::{OverlapError, Result};

/// Number of months in a year; valid month indices are `0..MONTHS_PER_YEAR`.
pub const MONTHS_PER_YEAR: u32 = 12;

const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days (28-31) in the given month.
///
/// # Panics
/// Panics if `month_index >= 12`.
pub fn days_in_month(year: i32, month_index: u32) -> u32 {
    assert_month_index(month_index);
    if month_index == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month_index as usize]
    }
}

/// Format a date as `YYYY-MM-DD` with a one-based, zero-padded month.
///
/// # Panics
/// Panics if `month_index >= 12`.
pub fn iso_date(year: i32, month_index: u32, day: u32) -> String {
    assert_month_index(month_index);
    format!("{:04}-{:02}-{:02}", year, month_index + 1, day)
}

/// Weekday of the first day of the month, Monday = 0 through Sunday = 6.
///
/// # Panics
/// Panics if `month_index >= 12` or the year is outside chrono's supported range.
pub fn first_weekday_offset(year: i32, month_index: u32) -> u32 {
    assert_month_index(month_index);
    match NaiveDate::from_ymd_opt(year, month_index + 1, 1) {
        Some(date) => date.weekday().num_days_from_monday(),
        None => panic!("year {} is outside the supported calendar range", year),
    }
}

/// Convert a user-facing one-based month number (1-12) into a month index.
pub fn month_index_from_number(month: u32) -> Result<u32> {
    if (1..=MONTHS_PER_YEAR).contains(&month) {
        Ok(month - 1)
    } else {
        Err(OverlapError::InvalidMonth(month))
    }
}

/// Reject years outside the range the calendar functions support.
pub fn validate_year(year: i32) -> Result<i32> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|_| NaiveDate::from_ymd_opt(year, 12, 31))
        .map(|_| year)
        .ok_or_else(|| {
            OverlapError::InvalidDate(format!(
                "year {} is outside the supported calendar range",
                year
            ))
        })
}

/// Parse an availability key (`YYYY-MM-DD`) into `(year, month_index, day)`.
pub fn parse_iso_date(s: &str) -> Result<(i32, u32, u32)> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| OverlapError::InvalidDate(format!("'{}': {}", s, e)))?;
    Ok((date.year(), date.month0(), date.day()))
}

fn assert_month_index(month_index: u32) {
    assert!(
        month_index < MONTHS_PER_YEAR,
        "month index {} out of range 0..12",
        month_index
    );
}
