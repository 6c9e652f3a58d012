//! Gregorian/Jalali calendar conversion, arithmetic and formatting.
//!
//! ```
//! use jalali_date::{to_gregorian, to_jalali, JalaliDate};
//!
//! let nowruz = to_gregorian(1403, 1, 1);
//! assert_eq!(nowruz.to_string(), "2024-03-20");
//! assert_eq!(to_jalali(nowruz), (1403, 1, 1));
//!
//! let date = JalaliDate::new(1402, 12, 29).unwrap();
//! assert_eq!(date.add_days(1).to_string(), "1403/01/01");
//! assert_eq!(date.format("yy-m-d"), "02-12-29");
//! ```

mod arith;
mod consts;
mod date;
mod day_number;
pub mod format;
mod gregorian;
pub mod names;
mod prelude;
mod types;

pub use consts::*;
pub use date::JalaliDate;
pub use gregorian::{ConversionError, GregorianDate};
pub use types::{Day, Month, days_in_month, is_leap_year};

use crate::prelude::*;
use day_number::{days_to_jalali, jalali_to_days, narrow_year};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}/{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    InvalidDayOfMonth(u8),
    #[display(fmt = "Year {_0} has no counterpart with a 32-bit year in the other calendar")]
    YearOutOfRange(i32),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// Jalali `(year, month, day)` of a Gregorian date.
///
/// Accepts a [`GregorianDate`], a `chrono::NaiveDate` or any
/// `chrono::DateTime` (its calendar day in its own time zone).
pub fn to_jalali(date: impl Into<GregorianDate>) -> (i32, u8, u8) {
    let (year, month, day) = days_to_jalali(date.into().to_days());
    (narrow_year(year), month, day)
}

/// Gregorian date (midnight UTC) of a Jalali `(year, month, day)`.
///
/// Never fails: a month outside 1..=12 carries into the year and a day past
/// the end of its month overflows into the following months.
pub fn to_gregorian(year: i32, month: i32, day: i32) -> GregorianDate {
    GregorianDate::from_days(jalali_to_days(
        i64::from(year),
        i64::from(month),
        i64::from(day),
    ))
}

/// Formats the Jalali equivalent of a Gregorian date with `pattern`.
///
/// See the [`format`](crate::format) module for the recognised tokens.
pub fn to_jalali_format(date: impl Into<GregorianDate>, pattern: &str) -> String {
    let (year, month, day) = to_jalali(date);
    format::format_jalali(year, month, day, pattern)
}
