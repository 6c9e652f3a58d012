/// Minimum year accepted by validated construction
pub const MIN_YEAR: i32 = 1;
/// Maximum year accepted by validated construction (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (Esfand / December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;
/// Longest month in either calendar
pub const MAX_DAY: u8 = 31;

/// Month number for Farvardin, the first Jalali month
pub const FARVARDIN: u8 = 1;
/// Month number for Esfand, the last Jalali month
pub const ESFAND: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in Esfand for Jalali leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;
/// Days in February for Gregorian leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Jalali month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Months in a year, for carrying month offsets into years
pub(crate) const MONTHS_PER_YEAR: i64 = MAX_MONTH as i64;

/// Length of the Jalali leap cycle in years
pub(crate) const JALALI_CYCLE_YEARS: i32 = 33;
/// Remainders of `year mod 33` that mark a Jalali leap year
pub(crate) const JALALI_LEAP_REMAINDERS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Gregorian leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Gregorian year at day number zero (1600-01-01)
pub(crate) const GREGORIAN_EPOCH_YEAR: i64 = 1600;
/// Jalali year whose first day is the Jalali origin of the day count
pub(crate) const JALALI_EPOCH_YEAR: i64 = 979;
/// Days between 1600-01-01 and 979-01-01 AP (1600-03-20)
pub(crate) const EPOCH_OFFSET_DAYS: i64 = 79;

/// Days in 400 Gregorian years
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in a century whose first year is a leap year
pub(crate) const DAYS_PER_LEAP_CENTURY: i64 = 36_525;
/// Days in a century whose first year is a common year
pub(crate) const DAYS_PER_CENTURY: i64 = 36_524;
/// Days in four years, one of them leap
pub(crate) const DAYS_PER_4_YEARS: i64 = 1461;
/// Days in 33 Jalali years (8 leap)
pub(crate) const DAYS_PER_33_YEARS: i64 = 12_053;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;
/// Days in a leap year
pub(crate) const DAYS_PER_LEAP_YEAR: i64 = 366;
/// Days in a week
pub(crate) const DAYS_PER_WEEK: i64 = 7;
/// Weekday of day number zero, counted from Sunday (1600-01-01 was a Saturday)
pub(crate) const EPOCH_WEEKDAY_FROM_SUNDAY: i64 = 6;

/// Jalali date separator used by `Display`
pub const DATE_SEPARATOR: char = '/';
/// Alternate separator accepted when parsing
pub const ALT_DATE_SEPARATOR: char = '-';
