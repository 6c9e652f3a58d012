use crate::consts::{ALT_DATE_SEPARATOR, DATE_SEPARATOR, MAX_YEAR, MIN_YEAR};
use crate::gregorian::{ConversionError, GregorianDate};
use crate::prelude::*;
use crate::types::{self, Day, Month};
use crate::{DateError, format, names, to_gregorian, to_jalali};
use chrono::{DateTime, NaiveDate, TimeZone, Utc, Weekday};
use log::{debug, trace};
use std::str::FromStr;

/// A Jalali calendar date.
///
/// Holds the Jalali year, month and day together with the Gregorian day they
/// name. The two are always built together, so the value can be used for
/// weekday lookups and day arithmetic without converting again.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", "year", "month.get()", "day.get()")]
pub struct JalaliDate {
    year:   i32,
    month:  Month,
    day:    Day,
    anchor: GregorianDate,
}

impl JalaliDate {
    /// Creates a validated Jalali date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the year is outside
    /// `MIN_YEAR..=MAX_YEAR`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` for components that do not name a real day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        let month = Month::new(month)?;
        let day = Day::new(day, year, month.get())?;
        Ok(Self::from_parts(year, month, day))
    }

    /// Creates a date without validation.
    ///
    /// A month outside 1..=12 carries into the year and a day past the end of
    /// its month overflows into the following months, so
    /// `new_lenient(1402, 12, 30)` is 1403/01/01. The stored fields are always
    /// the normalised ones.
    pub fn new_lenient(year: i32, month: i32, day: i32) -> Self {
        let date = Self::from_gregorian(to_gregorian(year, month, day));
        if (date.year, i32::from(date.month()), i32::from(date.day())) != (year, month, day) {
            debug!("normalised Jalali date {year}/{month}/{day} to {date}");
        }
        date
    }

    /// The Jalali date of a Gregorian day.
    pub fn from_gregorian(date: impl Into<GregorianDate>) -> Self {
        let anchor = date.into();
        let (year, month, day) = to_jalali(anchor);
        Self {
            year,
            month: Month::from_engine(month),
            day: Day::from_engine(day),
            anchor,
        }
    }

    /// Today's date in UTC.
    pub fn now() -> Self {
        let now = Utc::now();
        trace!("reading Jalali date from clock at {now}");
        Self::from_gregorian(now)
    }

    /// Builds from components that name a real day.
    ///
    /// Past either end of the representable range the result saturates to the
    /// first or last representable day, fields and anchor alike.
    pub(crate) fn from_parts(year: i32, month: Month, day: Day) -> Self {
        let anchor = to_gregorian(year, i32::from(month.get()), i32::from(day.get()));
        let date = Self::from_gregorian(anchor);
        if (date.year, date.month, date.day) != (year, month, day) {
            debug!(
                "{year}/{:02}/{:02} is outside the representable range, saturated to {date}",
                month.get(),
                day.get()
            );
        }
        date
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// The Gregorian day (midnight UTC) this date names.
    pub const fn to_gregorian(&self) -> GregorianDate {
        self.anchor
    }

    /// # Errors
    /// Returns `ConversionError::OutOfRange` outside chrono's supported years.
    pub fn to_naive_date(&self) -> Result<NaiveDate, ConversionError> {
        self.anchor.to_naive_date()
    }

    /// Midnight UTC of this date.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` outside chrono's supported years.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, ConversionError> {
        self.anchor.to_utc()
    }

    /// Formats with `yyyy`, `yy`, `mm`, `m`, `dd` and `d` tokens.
    ///
    /// ```
    /// use jalali_date::JalaliDate;
    ///
    /// let date = JalaliDate::new(1401, 7, 18).unwrap();
    /// assert_eq!(date.format("d/m/yyyy"), "18/7/1401");
    /// ```
    pub fn format(&self, pattern: &str) -> String {
        format::format_jalali(self.year, self.month(), self.day(), pattern)
    }

    /// Persian month name, e.g. `"اسفند"`.
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub fn weekday(&self) -> Weekday {
        self.anchor.weekday()
    }

    /// Persian weekday name, e.g. `"چهارشنبه"`.
    pub fn weekday_name(&self) -> &'static str {
        names::weekday_name(self.weekday())
    }

    /// Whether this date's year has a 30-day Esfand.
    pub fn is_leap_year(&self) -> bool {
        types::is_leap_year(self.year)
    }

    /// Number of days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        types::days_in_month(self.year, self.month())
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_gregorian(date)
    }
}

impl From<NaiveDate> for JalaliDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_gregorian(date)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for JalaliDate {
    fn from(date: DateTime<Tz>) -> Self {
        Self::from_gregorian(date)
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        date.anchor
    }
}

impl TryFrom<JalaliDate> for NaiveDate {
    type Error = ConversionError;

    fn try_from(date: JalaliDate) -> Result<Self, Self::Error> {
        date.to_naive_date()
    }
}

impl TryFrom<(i32, u8, u8)> for JalaliDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for JalaliDate {
    type Err = DateError;

    /// Parses `yyyy/mm/dd` or `yyyy-mm-dd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let has_slash = trimmed.contains(DATE_SEPARATOR);
        let has_hyphen = trimmed.contains(ALT_DATE_SEPARATOR);
        let separator = match (has_slash, has_hyphen) {
            (true, false) => DATE_SEPARATOR,
            (false, true) => ALT_DATE_SEPARATOR,
            (true, true) => {
                return Err(DateError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {ALT_DATE_SEPARATOR})"
                )));
            }
            (false, false) => return Err(DateError::InvalidFormat(trimmed.to_owned())),
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => Self::new(
                Self::parse_component(year)?,
                Self::parse_component(month)?,
                Self::parse_component(day)?,
            ),
            _ => Err(DateError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            ))),
        }
    }
}

impl JalaliDate {
    /// Helper to parse a numeric component with a format error
    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        s.parse::<T>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
