//! Persian month and weekday names.

use chrono::Weekday;

/// Jalali month names in Persian (index 0 is unused, months are 1-indexed)
pub const PERSIAN_MONTH_NAMES: [&str; 13] = [
    "", // index 0 unused
    "فروردین", // Farvardin
    "اردیبهشت", // Ordibehesht
    "خرداد", // Khordad
    "تیر", // Tir
    "مرداد", // Mordad
    "شهریور", // Shahrivar
    "مهر", // Mehr
    "آبان", // Aban
    "آذر", // Azar
    "دی", // Dey
    "بهمن", // Bahman
    "اسفند", // Esfand
];

/// Weekday names in Persian, indexed by days from Sunday (0 = Sunday .. 6 = Saturday)
pub const PERSIAN_WEEKDAY_NAMES: [&str; 7] = [
    "یک‌شنبه", // Sunday
    "دوشنبه", // Monday
    "سه‌شنبه", // Tuesday
    "چهارشنبه", // Wednesday
    "پنج‌شنبه", // Thursday
    "جمعه", // Friday
    "شنبه", // Saturday
];

/// Persian name of a Jalali month, or `""` if `month` is not in 1..=12.
pub fn month_name(month: u8) -> &'static str {
    PERSIAN_MONTH_NAMES
        .get(usize::from(month))
        .copied()
        .unwrap_or_default()
}

/// Persian name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    PERSIAN_WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}
