use crate::consts::{DAYS_PER_WEEK, EPOCH_WEEKDAY_FROM_SUNDAY, MAX_MONTH, MIN_DAY};
use crate::day_number::{
    clamp_days, days_to_gregorian, gregorian_to_days, narrow_year, representable_days,
};
use crate::prelude::*;
use crate::types::gregorian_days_in_month;
use crate::DateError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use std::str::FromStr;

/// A Gregorian calendar day, taken as midnight UTC.
///
/// This is the anchor every [`crate::JalaliDate`] keeps alongside its Jalali
/// fields. Values are always valid calendar dates whose Jalali year also fits
/// in `i32`, which rules out the first 621 or so Gregorian years above
/// `i32::MIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month", "day")]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

/// Error converting a [`GregorianDate`] into a `chrono` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The date lies outside the range `chrono` can represent.
    #[error("Date {0} is outside the range supported by chrono")]
    OutOfRange(GregorianDate),
}

const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

impl GregorianDate {
    /// Creates a validated Gregorian date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` when the
    /// components do not name a real day, and `DateError::YearOutOfRange` when
    /// the day has no Jalali counterpart with an `i32` year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > gregorian_days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }

        let date = Self { year, month, day };
        if !representable_days().contains(&date.to_days()) {
            return Err(DateError::YearOutOfRange(year));
        }
        Ok(date)
    }

    /// Date of a day number, saturating at the ends of the representable range.
    pub(crate) fn from_days(days: i64) -> Self {
        let (year, month, day) = days_to_gregorian(clamp_days(days));
        Self {
            year: narrow_year(year),
            month,
            day,
        }
    }

    pub(crate) fn to_days(self) -> i64 {
        gregorian_to_days(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        )
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        let index = (self.to_days() + EPOCH_WEEKDAY_FROM_SUNDAY).rem_euclid(DAYS_PER_WEEK);
        WEEKDAYS_FROM_SUNDAY[usize::try_from(index).unwrap_or(0)]
    }

    /// The date `days` days later (earlier when negative).
    pub fn add_days(self, days: i64) -> Self {
        Self::from_days(self.to_days().saturating_add(days))
    }

    /// Converts to a `chrono::NaiveDate`.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` outside chrono's supported years.
    pub fn to_naive_date(self) -> Result<NaiveDate, ConversionError> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
            .ok_or(ConversionError::OutOfRange(self))
    }

    /// Midnight UTC of this day.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` outside chrono's supported years.
    pub fn to_utc(self) -> Result<DateTime<Utc>, ConversionError> {
        Ok(self.to_naive_date()?.and_time(NaiveTime::MIN).and_utc())
    }

    fn from_datelike<D: Datelike>(date: &D) -> Self {
        Self::from_days(gregorian_to_days(
            i64::from(date.year()),
            i64::from(date.month()),
            i64::from(date.day()),
        ))
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_datelike(&date)
    }
}

/// Uses the calendar day of `date` in its own time zone.
impl<Tz: TimeZone> From<DateTime<Tz>> for GregorianDate {
    fn from(date: DateTime<Tz>) -> Self {
        Self::from_datelike(&date)
    }
}

impl TryFrom<GregorianDate> for NaiveDate {
    type Error = ConversionError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        date.to_naive_date()
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    /// Parses an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split('-').map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };

        let parse_err = |_| DateError::InvalidFormat(trimmed.to_owned());
        Self::new(
            year.parse().map_err(parse_err)?,
            month.parse().map_err(parse_err)?,
            day.parse().map_err(parse_err)?,
        )
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
