//! Calendar arithmetic on [`JalaliDate`].
//!
//! Day and week offsets go through the Gregorian anchor, so they are exact
//! day counts. Month and year offsets work on the Jalali fields and clamp the
//! day to the last day of the target month instead of rolling over.

use crate::{GregorianDate, JalaliDate};
use crate::consts::{DAYS_PER_WEEK, FARVARDIN, MONTHS_PER_YEAR};
use crate::day_number::narrow_small;
use crate::types::{Day, Month, days_in_month};
use log::debug;

impl JalaliDate {
    /// The date `n` days later.
    pub fn add_days(self, n: i32) -> Self {
        self.shift_days(i64::from(n))
    }

    /// The date `n` days earlier.
    pub fn remove_days(self, n: i32) -> Self {
        self.shift_days(-i64::from(n))
    }

    /// The date `7 * n` days later.
    pub fn add_weeks(self, n: i32) -> Self {
        self.shift_days(i64::from(n) * DAYS_PER_WEEK)
    }

    /// The date `7 * n` days earlier.
    pub fn remove_weeks(self, n: i32) -> Self {
        self.shift_days(-i64::from(n) * DAYS_PER_WEEK)
    }

    /// Same day `n` months later, clamped to the target month's length.
    ///
    /// ```
    /// use jalali_date::JalaliDate;
    ///
    /// let date = JalaliDate::new(1403, 6, 31).unwrap();
    /// assert_eq!(date.add_months(1).to_string(), "1403/07/30");
    /// ```
    pub fn add_months(self, n: i32) -> Self {
        self.shift_months(i64::from(n))
    }

    /// Same day `n` months earlier, clamped to the target month's length.
    pub fn remove_months(self, n: i32) -> Self {
        self.shift_months(-i64::from(n))
    }

    /// Same month and day `n` years later. Esfand 30 becomes Esfand 29 in a
    /// common year.
    pub fn add_years(self, n: i32) -> Self {
        self.shift_years(i64::from(n))
    }

    /// Same month and day `n` years earlier. Esfand 30 becomes Esfand 29 in
    /// a common year.
    pub fn remove_years(self, n: i32) -> Self {
        self.shift_years(-i64::from(n))
    }

    fn shift_days(self, days: i64) -> Self {
        Self::from_gregorian(self.to_gregorian().add_days(days))
    }

    fn shift_months(self, months: i64) -> Self {
        // Carry with floor division so negative offsets borrow from the year.
        let first = i64::from(FARVARDIN);
        let index = i64::from(self.month()) - first + months;
        let year = i64::from(self.year()) + index.div_euclid(MONTHS_PER_YEAR);
        let month = Month::from_engine(narrow_small(index.rem_euclid(MONTHS_PER_YEAR) + first));
        self.with_year_month(year, month)
    }

    fn shift_years(self, years: i64) -> Self {
        self.with_year_month(i64::from(self.year()) + years, self.month_typed())
    }

    fn with_year_month(self, year: i64, month: Month) -> Self {
        let Ok(year) = i32::try_from(year) else {
            debug!("year {year} does not fit in i32, saturating");
            let days = if year < 0 { i64::MIN } else { i64::MAX };
            return Self::from_gregorian(GregorianDate::from_days(days));
        };
        let max_day = days_in_month(year, month.get());

        let day = if self.day() > max_day {
            debug!(
                "clamping day {} to {max_day} for {year}/{:02}",
                self.day(),
                month.get()
            );
            Day::from_engine(max_day)
        } else {
            self.day_typed()
        };

        Self::from_parts(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use crate::{GregorianDate, JalaliDate, to_gregorian};

    fn jdate(year: i32, month: u8, day: u8) -> JalaliDate {
        JalaliDate::new(year, month, day).unwrap()
    }

    fn ymd(date: JalaliDate) -> (i32, u8, u8) {
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn test_add_days_across_nowruz() {
        assert_eq!(ymd(jdate(1402, 12, 29).add_days(1)), (1403, 1, 1));
        assert_eq!(ymd(jdate(1403, 12, 30).add_days(1)), (1404, 1, 1));
        assert_eq!(ymd(jdate(1402, 12, 29).add_days(5)), (1403, 1, 5));
    }

    #[test]
    fn test_remove_days() {
        assert_eq!(ymd(jdate(1402, 12, 29).remove_days(1)), (1402, 12, 28));
        assert_eq!(ymd(jdate(1402, 12, 29).remove_days(10)), (1402, 12, 19));
        assert_eq!(ymd(jdate(1403, 1, 1).remove_days(1)), (1402, 12, 29));
        assert_eq!(ymd(jdate(1404, 1, 1).remove_days(1)), (1403, 12, 30));
    }

    #[test]
    fn test_add_days_negative_is_remove() {
        let date = jdate(1402, 7, 1);
        assert_eq!(date.add_days(-40), date.remove_days(40));
        assert_eq!(date.add_weeks(-3), date.remove_weeks(3));
    }

    #[test]
    fn test_days_follow_gregorian_anchor() {
        let date = jdate(1402, 12, 29);
        assert_eq!(
            date.add_days(365).to_gregorian(),
            date.to_gregorian().add_days(365)
        );
    }

    #[test]
    fn test_weeks() {
        assert_eq!(ymd(jdate(1402, 12, 29).add_weeks(1)), (1403, 1, 7));
        assert_eq!(ymd(jdate(1402, 12, 29).remove_weeks(1)), (1402, 12, 22));
    }

    #[test]
    fn test_add_months() {
        assert_eq!(ymd(jdate(1402, 12, 29).add_months(1)), (1403, 1, 29));
        assert_eq!(ymd(jdate(1402, 1, 15).add_months(11)), (1402, 12, 15));
        assert_eq!(ymd(jdate(1402, 1, 15).add_months(12)), (1403, 1, 15));
        assert_eq!(ymd(jdate(1402, 1, 15).add_months(25)), (1404, 2, 15));
    }

    #[test]
    fn test_remove_months() {
        assert_eq!(ymd(jdate(1402, 12, 29).remove_months(1)), (1402, 11, 29));
        assert_eq!(ymd(jdate(1402, 12, 29).remove_months(2)), (1402, 10, 29));
        assert_eq!(ymd(jdate(1403, 1, 10).remove_months(1)), (1402, 12, 10));
        assert_eq!(ymd(jdate(1403, 1, 10).remove_months(13)), (1401, 12, 10));
        assert_eq!(ymd(jdate(1403, 1, 10).add_months(-24)), (1401, 1, 10));
    }

    #[test]
    fn test_months_clamp_instead_of_rolling_over() {
        // 31-day month into a 30-day month
        assert_eq!(ymd(jdate(1403, 6, 31).add_months(1)), (1403, 7, 30));
        // 31-day month into a common-year Esfand
        assert_eq!(ymd(jdate(1402, 11, 30).add_months(1)), (1402, 12, 29));
        assert_eq!(ymd(jdate(1401, 1, 31).remove_months(1)), (1400, 12, 29));
        // leap-year Esfand keeps its 30th
        assert_eq!(ymd(jdate(1403, 5, 31).add_months(7)), (1403, 12, 30));
    }

    #[test]
    fn test_years() {
        assert_eq!(ymd(jdate(1402, 12, 29).add_years(1)), (1403, 12, 29));
        assert_eq!(ymd(jdate(1402, 12, 29).remove_years(1)), (1401, 12, 29));
        assert_eq!(ymd(jdate(1402, 6, 31).add_years(10)), (1412, 6, 31));
    }

    #[test]
    fn test_years_clamp_on_leap_boundary() {
        // 1403 is leap, 1402 and 1404 are not
        assert_eq!(ymd(jdate(1403, 12, 30).add_years(1)), (1404, 12, 29));
        assert_eq!(ymd(jdate(1403, 12, 30).remove_years(1)), (1402, 12, 29));
        // 1399 and 1408 are leap, so the 30th survives
        assert_eq!(ymd(jdate(1399, 12, 30).add_years(4)), (1403, 12, 30));
        assert_eq!(ymd(jdate(1403, 12, 30).add_years(5)), (1408, 12, 30));
    }

    #[test]
    fn test_results_keep_anchor_in_sync() {
        let date = jdate(1403, 12, 30);
        let shifted = [
            date.add_days(17),
            date.remove_weeks(9),
            date.add_months(5),
            date.remove_months(30),
            date.add_years(1),
            date.remove_years(7),
        ];

        for result in shifted {
            assert_eq!(JalaliDate::from_gregorian(result.to_gregorian()), result);
        }
    }

    #[test]
    fn test_add_then_remove_days_is_identity() {
        let dates = [
            jdate(1402, 12, 29),
            jdate(1403, 12, 30),
            jdate(1300, 1, 1),
            jdate(1450, 6, 31),
        ];

        for date in dates {
            for n in [0, 1, 29, 30, 31, 365, 366, 10_000] {
                assert_eq!(date.add_days(n).remove_days(n), date, "{date} +/- {n}");
                assert_eq!(date.add_weeks(n).remove_weeks(n), date, "{date} +/- {n}w");
            }
        }
    }

    #[test]
    fn test_extreme_offsets_do_not_overflow() {
        let date = jdate(1403, 1, 1);
        let far = date.add_days(i32::MAX);
        assert!(far > date);
        assert_eq!(far.remove_days(i32::MAX), date);

        let back = date.remove_months(i32::MIN);
        assert!(back.year() > date.year());
        assert!(date.add_months(i32::MIN).year() < date.year());
    }

    #[test]
    fn test_extreme_offsets_keep_anchor_in_sync() {
        let dates = [jdate(1403, 1, 1), jdate(1403, 12, 30), jdate(1, 6, 31)];

        for date in dates {
            let shifted = [
                date.add_years(i32::MAX),
                date.add_years(i32::MIN),
                date.remove_years(i32::MAX),
                date.remove_years(i32::MIN),
                date.add_months(i32::MAX),
                date.add_months(i32::MIN),
                date.remove_months(i32::MAX),
                date.remove_months(i32::MIN),
                date.add_days(i32::MIN),
                date.add_weeks(i32::MAX),
                date.remove_weeks(i32::MAX),
            ];

            for result in shifted {
                assert_eq!(
                    JalaliDate::from_gregorian(result.to_gregorian()),
                    result,
                    "{date} -> {result}"
                );
                assert_eq!(
                    to_gregorian(result.year(), i32::from(result.month()), i32::from(result.day())),
                    result.to_gregorian(),
                    "{date} -> {result}"
                );
            }
        }
    }

    #[test]
    fn test_years_saturate_at_representable_ends() {
        let date = jdate(1403, 1, 1);

        let last = date.add_years(i32::MAX);
        assert_eq!(last.to_gregorian(), GregorianDate::new(i32::MAX, 12, 31).unwrap());
        assert_eq!(last.add_days(1), last);
        assert_eq!(last.add_years(1), last);
        assert_eq!(last.add_months(1), last);

        let first = date.add_years(i32::MIN).add_years(i32::MIN);
        assert_eq!(ymd(first), (i32::MIN, 1, 1));
        assert_eq!(first.remove_days(1), first);
        assert_eq!(first.remove_months(1), first);
        assert_eq!(first.remove_years(1), first);
    }

    #[test]
    fn test_anchor_for_day_results() {
        let next = jdate(1402, 12, 29).add_days(1);
        assert_eq!(next.to_gregorian(), GregorianDate::new(2024, 3, 20).unwrap());
    }
}
