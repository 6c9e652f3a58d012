//! Absolute day numbers shared by the Gregorian and Jalali calendars.
//!
//! Day zero is 1600-01-01 (Gregorian). Jalali day numbers are counted from
//! 979-01-01 AP and shifted by [`EPOCH_OFFSET_DAYS`] onto the same origin,
//! so a day number can be produced by one calendar and read back by the other.
//!
//! Block splitting uses floor division. For day numbers on or after the
//! epoch this is the same as truncating division; before it, floor keeps the
//! remainders non-negative so both directions stay exact inverses.

use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_33_YEARS, DAYS_PER_4_YEARS, DAYS_PER_400_YEARS, DAYS_PER_CENTURY,
    DAYS_PER_LEAP_CENTURY, DAYS_PER_LEAP_YEAR, DAYS_PER_YEAR, EPOCH_OFFSET_DAYS, FARVARDIN,
    FEBRUARY, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH_YEAR, JALALI_CYCLE_YEARS,
    JALALI_DAYS_IN_MONTH, JALALI_EPOCH_YEAR, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
    MONTHS_PER_YEAR,
};
use std::ops::RangeInclusive;

const LEAP_YEARS_PER_33: i64 = 8;

/// Days since 1600-01-01 for a Gregorian date.
///
/// Months outside 1..=12 carry into the year; days outside the month
/// overflow into neighbouring months.
pub(crate) fn gregorian_to_days(year: i64, month: i64, day: i64) -> i64 {
    let (year, prior_months) = carry_month(year, month);
    let gy = year - GREGORIAN_EPOCH_YEAR;

    let leap_days = (gy + 3).div_euclid(i64::from(LEAP_YEAR_CYCLE))
        - (gy + 99).div_euclid(i64::from(CENTURY_CYCLE))
        + (gy + 399).div_euclid(i64::from(GREGORIAN_CYCLE));
    let mut days = DAYS_PER_YEAR * gy + leap_days;

    days += month_days_before(&GREGORIAN_DAYS_IN_MONTH, prior_months);
    if prior_months >= usize::from(FEBRUARY) && is_gregorian_leap(year) {
        days += 1;
    }

    days + day - 1
}

/// Gregorian `(year, month, day)` for a day number.
pub(crate) fn days_to_gregorian(days: i64) -> (i64, u8, u8) {
    let mut rest = days.rem_euclid(DAYS_PER_400_YEARS);
    let mut year = GREGORIAN_EPOCH_YEAR + 400 * days.div_euclid(DAYS_PER_400_YEARS);

    // The first century of each 400-year block starts with a leap year,
    // the other three start with a common year.
    let mut leap = true;
    if rest >= DAYS_PER_LEAP_CENTURY {
        rest -= 1;
        year += 100 * (rest / DAYS_PER_CENTURY);
        rest %= DAYS_PER_CENTURY;

        if rest >= DAYS_PER_YEAR {
            rest += 1;
        } else {
            leap = false;
        }
    }

    year += 4 * (rest / DAYS_PER_4_YEARS);
    rest %= DAYS_PER_4_YEARS;

    if rest >= DAYS_PER_LEAP_YEAR {
        leap = false;
        rest -= 1;
        year += rest / DAYS_PER_YEAR;
        rest %= DAYS_PER_YEAR;
    }

    let mut month = 1;
    while month < MAX_MONTH {
        let length = i64::from(GREGORIAN_DAYS_IN_MONTH[usize::from(month)])
            + i64::from(month == FEBRUARY && leap);
        if rest < length {
            break;
        }
        rest -= length;
        month += 1;
    }

    (year, month, narrow_small(rest + 1))
}

/// Days since 1600-01-01 for a Jalali date.
///
/// Months outside 1..=12 carry into the year; days outside the month
/// overflow into neighbouring months.
pub(crate) fn jalali_to_days(year: i64, month: i64, day: i64) -> i64 {
    let (year, prior_months) = carry_month(year, month);
    let jy = year - JALALI_EPOCH_YEAR;
    let cycle = i64::from(JALALI_CYCLE_YEARS);

    // Within a cycle every fourth year, starting with the first, is leap.
    let leap_days = jy.div_euclid(cycle) * LEAP_YEARS_PER_33 + (jy.rem_euclid(cycle) + 3) / 4;
    let mut days = DAYS_PER_YEAR * jy + leap_days;
    days += month_days_before(&JALALI_DAYS_IN_MONTH, prior_months);
    days += day - 1;

    days + EPOCH_OFFSET_DAYS
}

/// Jalali `(year, month, day)` for a day number.
pub(crate) fn days_to_jalali(days: i64) -> (i64, u8, u8) {
    let days = days - EPOCH_OFFSET_DAYS;

    let cycle = i64::from(JALALI_CYCLE_YEARS);
    let mut year = JALALI_EPOCH_YEAR + cycle * days.div_euclid(DAYS_PER_33_YEARS);
    let mut rest = days.rem_euclid(DAYS_PER_33_YEARS);

    year += 4 * (rest / DAYS_PER_4_YEARS);
    rest %= DAYS_PER_4_YEARS;

    if rest >= DAYS_PER_LEAP_YEAR {
        year += (rest - 1) / DAYS_PER_YEAR;
        rest = (rest - 1) % DAYS_PER_YEAR;
    }

    let mut month = 1;
    while month < MAX_MONTH {
        let length = i64::from(JALALI_DAYS_IN_MONTH[usize::from(month)]);
        if rest < length {
            break;
        }
        rest -= length;
        month += 1;
    }

    (year, month, narrow_small(rest + 1))
}

/// Day numbers whose Gregorian year and Jalali year both fit in `i32`.
///
/// The Jalali year trails the Gregorian year by about 621, so the first day
/// is Farvardin 1 of Jalali year `i32::MIN` and the last is December 31 of
/// Gregorian year `i32::MAX`.
pub(crate) fn representable_days() -> RangeInclusive<i64> {
    let (min, max) = (i64::from(i32::MIN), i64::from(i32::MAX));
    let first = gregorian_to_days(min, 1, 1).max(jalali_to_days(min, 1, 1));
    let last = gregorian_to_days(max + 1, 1, 1).min(jalali_to_days(max + 1, 1, 1)) - 1;
    first..=last
}

/// Saturates a day number to [`representable_days`].
pub(crate) fn clamp_days(days: i64) -> i64 {
    let range = representable_days();
    days.clamp(*range.start(), *range.end())
}

/// Narrows a year computed in `i64` to the public `i32` range, saturating.
///
/// Years of day numbers inside [`representable_days`] always fit.
pub(crate) fn narrow_year(year: i64) -> i32 {
    i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX })
}

/// Narrows a month or day value that is known to be small.
pub(crate) fn narrow_small(value: i64) -> u8 {
    u8::try_from(value).unwrap_or(MIN_DAY)
}

/// Splits a possibly out-of-range month into `(year, completed months)`.
fn carry_month(year: i64, month: i64) -> (i64, usize) {
    let index = month - i64::from(FARVARDIN);
    let prior = usize::try_from(index.rem_euclid(MONTHS_PER_YEAR)).unwrap_or(0);
    (year + index.div_euclid(MONTHS_PER_YEAR), prior)
}

fn month_days_before(table: &[u8; 13], prior_months: usize) -> i64 {
    table[1..=prior_months].iter().copied().map(i64::from).sum()
}

fn is_gregorian_leap(year: i64) -> bool {
    (year % i64::from(LEAP_YEAR_CYCLE) == 0 && year % i64::from(CENTURY_CYCLE) != 0)
        || year % i64::from(GREGORIAN_CYCLE) == 0
}
