use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, JALALI_CYCLE_YEARS, JALALI_DAYS_IN_MONTH, JALALI_LEAP_REMAINDERS,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MIN_DAY,
};
use crate::names;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A Jalali month guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Wraps a month produced by the day-number engine, which is always 1..=12.
    pub(crate) fn from_engine(value: u8) -> Self {
        debug_assert!(value != 0 && value <= MAX_MONTH);
        Self(NonZeroU8::new(value).unwrap_or(NonZeroU8::MIN))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Persian name of the month, e.g. `"فروردین"`
    pub fn name(self) -> &'static str {
        names::month_name(self.get())
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Jalali day-of-month guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given Jalali year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or too large for the given year and month.
    pub fn new(value: u8, year: i32, month: u8) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year,
            month,
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Wraps a day produced by the day-number engine or by clamping, which is always >= 1.
    pub(crate) fn from_engine(value: u8) -> Self {
        debug_assert!(value >= MIN_DAY);
        Self(NonZeroU8::new(value).unwrap_or(NonZeroU8::MIN))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    /// Checks only `MIN_DAY..=MAX_DAY`; the month is not known here.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match NonZeroU8::new(value) {
            Some(day) if value <= MAX_DAY => Ok(Self(day)),
            _ => Err(DateError::InvalidDayOfMonth(value)),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Whether `year` is a Jalali leap year (Esfand has 30 days).
///
/// Uses the 33-year cycle: `year mod 33` in {1, 5, 9, 13, 17, 22, 26, 30}.
pub fn is_leap_year(year: i32) -> bool {
    JALALI_LEAP_REMAINDERS.contains(&year.rem_euclid(JALALI_CYCLE_YEARS))
}

/// Number of days in a Jalali month.
///
/// Months 1-6 have 31 days, 7-11 have 30, and Esfand has 29 or 30.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[usize::from(month)]
    }
}

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn gregorian_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}
