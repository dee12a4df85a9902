//! Calendar date utilities
//!
//! Dates are [`NaiveDateTime`] values in the caller's wall-clock time. Every
//! operation returns a new value.
//!
//! Calendar arithmetic (`add_days`, `add_months`, `add_years`,
//! `days_in_month`) goes through one normalization routine with rollover
//! semantics: out-of-range months carry into the year and out-of-range days
//! carry into the month. Adding one month to January 31st of a common year
//! therefore lands on March 3rd, not February 28th.
//!
//! Predicates relative to "now" (`is_today`, `is_future_date`, ...) take a
//! [`Clock`] so tests can pin the current time with
//! [`MockClock`](crate::testing::MockClock).
//!
//! ```
//! use awesome_common::date::{add_months, days_between, format_date, parse_date};
//!
//! let start = parse_date("2023-01-31").unwrap();
//! assert_eq!(format_date(&add_months(&start, 1), "YYYY-MM-DD"), "2023-03-03");
//!
//! let end = parse_date("2023-12-31").unwrap();
//! assert_eq!(days_between(&start, &end), 334);
//! ```

use chrono::{
    DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday,
};
use serde::{Deserialize, Serialize};

use crate::error::{CommonError, CommonResult};
use crate::testing::time::Clock;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Default pattern for [`format_date_default`]
pub const DEFAULT_DATE_FORMAT: &str = "MM/DD/YYYY";

/// Inclusive span between two instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First millisecond of the range
    pub start: NaiveDateTime,
    /// Last millisecond of the range
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Whether `date` falls within the range, both ends included
    #[must_use]
    pub fn contains(&self, date: &NaiveDateTime) -> bool {
        self.start <= *date && *date <= self.end
    }
}

// -----------------------------------------------------------------------------
// Calendar normalization
// -----------------------------------------------------------------------------

/// Build a date from possibly out-of-range fields
///
/// `month0` is zero-based and may be negative or exceed 11; `day` may be zero
/// or negative (day 0 is the last day of the previous month). Returns `None`
/// outside chrono's representable range.
fn normalize(year: i64, month0: i64, day: i64, time: NaiveTime) -> Option<NaiveDateTime> {
    let year = year.checked_add(month0.div_euclid(12))?;
    let month = u32::try_from(month0.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    let date = first.checked_add_signed(Duration::try_days(day.checked_sub(1)?)?)?;
    Some(date.and_time(time))
}

fn saturate(forward: bool) -> NaiveDateTime {
    if forward {
        NaiveDateTime::MAX
    } else {
        NaiveDateTime::MIN
    }
}

fn shifted(date: &NaiveDateTime, years: i64, months: i64, days: i64) -> NaiveDateTime {
    normalize(
        i64::from(date.year()).saturating_add(years),
        i64::from(date.month0()).saturating_add(months),
        i64::from(date.day()).saturating_add(days),
        date.time(),
    )
    .unwrap_or_else(|| saturate(years.saturating_add(months).saturating_add(days) >= 0))
}

// -----------------------------------------------------------------------------
// Parsing and formatting
// -----------------------------------------------------------------------------

/// Parse a date or date-time string
///
/// Accepted forms:
/// - `YYYY-MM-DD` (midnight)
/// - `YYYY-MM-DDTHH:MM:SS[.fff]` and the same with a space separator
/// - RFC 3339 with an offset, converted to the local time zone
///
/// # Errors
///
/// Returns `CommonError::InvalidInput` carrying the rejected text when no
/// form matches.
pub fn parse_date(input: &str) -> CommonResult<NaiveDateTime> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(parsed);
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Local).naive_local());
    }

    Err(CommonError::invalid_input_with_value("date", "unrecognized date format", input))
}

/// Whether `input` parses as a date
#[must_use]
pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_ok()
}

/// Substitute `YYYY`, `MM` and `DD` in `format`
///
/// Only the first occurrence of each token is replaced; month and day are
/// zero-padded to two digits. Anything else in `format` is copied through.
///
/// ```
/// use awesome_common::date::{format_date, parse_date};
///
/// let christmas = parse_date("2023-12-25").unwrap();
/// assert_eq!(format_date(&christmas, "MM/DD/YYYY"), "12/25/2023");
/// assert_eq!(format_date(&christmas, "DD.MM.YYYY hh:mm"), "25.12.2023 hh:mm");
/// ```
#[must_use]
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    format
        .replacen("YYYY", &date.year().to_string(), 1)
        .replacen("MM", &format!("{:02}", date.month()), 1)
        .replacen("DD", &format!("{:02}", date.day()), 1)
}

/// [`format_date`] with [`DEFAULT_DATE_FORMAT`]
#[must_use]
pub fn format_date_default(date: &NaiveDateTime) -> String {
    format_date(date, DEFAULT_DATE_FORMAT)
}

/// Parse `input` and format it with `format`
///
/// # Errors
///
/// Returns `CommonError::InvalidInput` when `input` is not a date.
pub fn format_date_str(input: &str, format: &str) -> CommonResult<String> {
    parse_date(input).map(|date| format_date(&date, format))
}

// -----------------------------------------------------------------------------
// Arithmetic
// -----------------------------------------------------------------------------

/// Whole days between two instants, rounded, order independent
#[must_use]
pub fn days_between(a: &NaiveDateTime, b: &NaiveDateTime) -> i64 {
    let millis = (*a - *b).num_milliseconds().abs() as f64;
    (millis / MS_PER_DAY).round() as i64
}

/// Shift by `days` calendar days
#[must_use]
pub fn add_days(date: &NaiveDateTime, days: i64) -> NaiveDateTime {
    shifted(date, 0, 0, days)
}

/// Shift by `months` calendar months, rolling over short months
#[must_use]
pub fn add_months(date: &NaiveDateTime, months: i64) -> NaiveDateTime {
    shifted(date, 0, months, 0)
}

/// Shift by `years`; February 29th rolls to March 1st in common years
#[must_use]
pub fn add_years(date: &NaiveDateTime, years: i64) -> NaiveDateTime {
    shifted(date, years, 0, 0)
}

/// Midnight at the start of `date`'s day
#[must_use]
pub fn start_of_day(date: &NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on `date`'s day
#[must_use]
pub fn end_of_day(date: &NaiveDateTime) -> NaiveDateTime {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.date().and_time(last_milli)
}

// -----------------------------------------------------------------------------
// Calendar queries
// -----------------------------------------------------------------------------

/// Gregorian leap year rule
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a 1-based `month`
///
/// Months outside `1..=12` roll into neighbouring years, so month 13 of
/// 2023 is January 2024.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    // Day 0 of the following month is the last day of this one
    normalize(i64::from(year), i64::from(month), 0, NaiveTime::MIN).map_or(0, |d| d.day())
}

/// Same calendar day
#[must_use]
pub fn is_same_day(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Same calendar month of the same year
#[must_use]
pub fn is_same_month(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Same calendar year
#[must_use]
pub fn is_same_year(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    a.year() == b.year()
}

/// Saturday or Sunday
#[must_use]
pub fn is_weekend(date: &NaiveDateTime) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Quarter of the year, 1 through 4
#[must_use]
pub fn get_quarter(date: &NaiveDateTime) -> u32 {
    date.month0() / 3 + 1
}

/// Monday 00:00:00.000 through Sunday 23:59:59.999 of `date`'s week
#[must_use]
pub fn get_week_range(date: &NaiveDateTime) -> DateRange {
    let back = i64::from(date.weekday().num_days_from_monday());
    let start = start_of_day(&add_days(date, -back));
    let end = end_of_day(&add_days(&start, 6));
    DateRange { start, end }
}

/// First through last millisecond of `date`'s month
#[must_use]
pub fn get_month_range(date: &NaiveDateTime) -> DateRange {
    let start = start_of_day(&add_days(date, 1 - i64::from(date.day())));
    let last_day = days_in_month(date.year(), date.month());
    let end = end_of_day(&add_days(&start, i64::from(last_day) - 1));
    DateRange { start, end }
}

// -----------------------------------------------------------------------------
// Predicates relative to the clock
// -----------------------------------------------------------------------------

/// Strictly after the clock's current time
pub fn is_future_date(date: &NaiveDateTime, clock: &impl Clock) -> bool {
    *date > clock.local_now()
}

/// Strictly before the clock's current time
pub fn is_past_date(date: &NaiveDateTime, clock: &impl Clock) -> bool {
    *date < clock.local_now()
}

/// On the clock's current day
pub fn is_today(date: &NaiveDateTime, clock: &impl Clock) -> bool {
    is_same_day(date, &clock.local_now())
}

/// On the day after the clock's current day
pub fn is_tomorrow(date: &NaiveDateTime, clock: &impl Clock) -> bool {
    is_same_day(date, &add_days(&clock.local_now(), 1))
}

/// On the day before the clock's current day
pub fn is_yesterday(date: &NaiveDateTime, clock: &impl Clock) -> bool {
    is_same_day(date, &add_days(&clock.local_now(), -1))
}

/// In the clock's current month
pub fn is_this_month(date: &NaiveDateTime, clock: &impl Clock) -> bool {
    is_same_month(date, &clock.local_now())
}

/// In the clock's current year
pub fn is_this_year(date: &NaiveDateTime, clock: &impl Clock) -> bool {
    is_same_year(date, &clock.local_now())
}

/// Hour, minute and second are all zero
#[must_use]
pub fn is_midnight(date: &NaiveDateTime) -> bool {
    date.num_seconds_from_midnight() == 0 && date.nanosecond() == 0
}

#[cfg(test)]
mod tests {
    //! Unit tests for date.
    use crate::testing::MockClock;

    use super::*;

    fn at(input: &str) -> NaiveDateTime {
        parse_date(input).unwrap()
    }

    /// Validates `parse_date` accepted forms and rejection.
    ///
    /// Assertions:
    /// - Confirms date-only input parses to midnight.
    /// - Confirms date-time input keeps milliseconds.
    /// - Ensures garbage is rejected with `InvalidInput`.
    #[test]
    fn test_parse_date() {
        assert!(is_midnight(&at("2023-01-01")));
        let precise = at("2023-01-01T12:34:56.789");
        assert_eq!(precise.and_utc().timestamp_subsec_millis(), 789);
        assert_eq!(at("2023-01-01 08:00:00").hour(), 8);
        assert!(is_valid_date("2023-06-15T10:00:00Z"));

        let err = parse_date("invalid-date").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(!is_valid_date("2023-02-30"));
    }

    /// Validates `format_date` token substitution.
    ///
    /// Assertions:
    /// - Confirms the default pattern.
    /// - Confirms unknown tokens and repeated tokens pass through.
    #[test]
    fn test_format_date() {
        let date = at("2023-03-05");
        assert_eq!(format_date_default(&date), "03/05/2023");
        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2023-03-05");
        assert_eq!(format_date(&date, "DD/MM/YY"), "05/03/YY");
        assert_eq!(format_date(&date, "MM MM"), "03 MM");
        assert_eq!(format_date_str("2023-12-25", "YYYY").unwrap(), "2023");
        assert!(format_date_str("nope", "YYYY").is_err());
    }

    /// Validates `days_between` symmetry and rounding.
    ///
    /// Assertions:
    /// - Confirms 364 days across 2023 in both orders.
    /// - Confirms half days round.
    #[test]
    fn test_days_between() {
        let a = at("2023-01-01");
        let b = at("2023-12-31");
        assert_eq!(days_between(&a, &b), 364);
        assert_eq!(days_between(&b, &a), 364);
        assert_eq!(days_between(&a, &at("2023-01-01T12:00:00")), 1);
        assert_eq!(days_between(&a, &at("2023-01-01T11:59:59")), 0);
    }

    /// Validates day, month and year arithmetic rollover.
    ///
    /// Assertions:
    /// - Confirms day offsets cross months and years in both directions.
    /// - Confirms short months overflow into the next month.
    /// - Confirms leap days roll to March 1st.
    #[test]
    fn test_add_calendar_fields() {
        assert_eq!(add_days(&at("2023-01-01"), 10), at("2023-01-11"));
        assert_eq!(add_days(&at("2023-01-01"), -1), at("2022-12-31"));
        assert_eq!(add_days(&at("2024-02-28T09:30:00"), 1), at("2024-02-29T09:30:00"));

        assert_eq!(add_months(&at("2023-01-31"), 1), at("2023-03-03"));
        assert_eq!(add_months(&at("2024-01-31"), 1), at("2024-03-02"));
        assert_eq!(add_months(&at("2023-11-15"), 3), at("2024-02-15"));
        assert_eq!(add_months(&at("2023-01-15"), -2), at("2022-11-15"));

        assert_eq!(add_years(&at("2024-02-29"), 1), at("2025-03-01"));
        assert_eq!(add_years(&at("2024-02-29"), 4), at("2028-02-29"));
        assert_eq!(add_years(&at("2020-06-01"), -20), at("2000-06-01"));
    }

    /// Validates overflow past chrono's range saturates instead of panicking.
    ///
    /// Assertions:
    /// - Confirms huge offsets clamp to the representable bounds.
    #[test]
    fn test_add_saturates() {
        assert_eq!(add_years(&at("2023-01-01"), i64::from(i32::MAX)), NaiveDateTime::MAX);
        assert_eq!(add_days(&at("2023-01-01"), -(1 << 40)), NaiveDateTime::MIN);
    }

    /// Validates leap years and month lengths.
    ///
    /// Assertions:
    /// - Confirms century rules.
    /// - Confirms February lengths and month rollover.
    #[test]
    fn test_leap_years_and_month_lengths() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2021));

        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 13), 31);
    }

    /// Validates same-day/month/year comparisons.
    ///
    /// Assertions:
    /// - Confirms time of day is ignored.
    /// - Confirms month comparisons include the year.
    #[test]
    fn test_same_field_comparisons() {
        assert!(is_same_day(&at("2023-01-01"), &at("2023-01-01T23:59:59")));
        assert!(!is_same_day(&at("2023-01-01"), &at("2023-01-02")));
        assert!(is_same_month(&at("2023-01-01"), &at("2023-01-15")));
        assert!(!is_same_month(&at("2023-01-01"), &at("2023-02-01")));
        assert!(!is_same_month(&at("2023-01-01"), &at("2024-01-01")));
        assert!(is_same_year(&at("2023-01-01"), &at("2023-12-31")));
        assert!(!is_same_year(&at("2023-01-01"), &at("2024-01-01")));
    }

    /// Validates week and month ranges.
    ///
    /// Assertions:
    /// - Confirms weeks run Monday to Sunday, including from a Sunday.
    /// - Confirms month ranges end on the last millisecond.
    #[test]
    fn test_ranges() {
        // 2023-01-04 is a Wednesday
        let week = get_week_range(&at("2023-01-04T15:00:00"));
        assert_eq!(week.start, at("2023-01-02"));
        assert_eq!(week.end, at("2023-01-08T23:59:59.999"));
        assert!(week.contains(&at("2023-01-08T12:00:00")));

        // Sundays belong to the week that started six days earlier
        let sunday_week = get_week_range(&at("2023-01-01"));
        assert_eq!(sunday_week.start, at("2022-12-26"));

        let month = get_month_range(&at("2024-02-10T08:00:00"));
        assert_eq!(month.start, at("2024-02-01"));
        assert_eq!(month.end, at("2024-02-29T23:59:59.999"));
        assert!(!month.contains(&at("2024-03-01")));
    }

    /// Validates quarters, weekends and day bounds.
    ///
    /// Assertions:
    /// - Confirms quarter boundaries.
    /// - Confirms 2023-01-01 (Sunday) is a weekend and the Monday after is not.
    #[test]
    fn test_quarter_weekend_day_bounds() {
        assert_eq!(get_quarter(&at("2023-01-01")), 1);
        assert_eq!(get_quarter(&at("2023-03-31")), 1);
        assert_eq!(get_quarter(&at("2023-04-01")), 2);
        assert_eq!(get_quarter(&at("2023-12-31")), 4);

        assert!(is_weekend(&at("2023-01-01")));
        assert!(is_weekend(&at("2023-01-07")));
        assert!(!is_weekend(&at("2023-01-02")));

        assert_eq!(start_of_day(&at("2023-01-01T12:34:56")), at("2023-01-01"));
        assert_eq!(end_of_day(&at("2023-01-01T00:00:01")), at("2023-01-01T23:59:59.999"));
    }

    /// Validates clock-relative predicates with a pinned clock.
    ///
    /// Assertions:
    /// - Confirms today, tomorrow and yesterday relative to the mock time.
    /// - Confirms future and past comparisons are strict.
    /// - Confirms month and year predicates.
    #[test]
    fn test_clock_relative_predicates() {
        let clock = MockClock::at(at("2023-12-31T18:00:00"));

        assert!(is_today(&at("2023-12-31"), &clock));
        assert!(is_tomorrow(&at("2024-01-01T07:00:00"), &clock));
        assert!(is_yesterday(&at("2023-12-30T23:59:59"), &clock));
        assert!(!is_today(&at("2024-01-01"), &clock));

        assert!(is_future_date(&at("2023-12-31T18:00:01"), &clock));
        assert!(!is_future_date(&at("2023-12-31T18:00:00"), &clock));
        assert!(is_past_date(&at("2023-12-31T17:59:59"), &clock));

        assert!(is_this_month(&at("2023-12-01"), &clock));
        assert!(!is_this_month(&at("2024-01-01"), &clock));
        assert!(is_this_year(&at("2023-01-01"), &clock));
        assert!(!is_this_year(&at("2024-12-31"), &clock));
    }
}
