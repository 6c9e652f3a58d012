//! Pattern formatting for Jalali dates.
//!
//! Recognised tokens are `yyyy`, `yy`, `mm`, `m`, `dd` and `d`. Each token is
//! replaced everywhere in the pattern, longest tokens first, so `yyyy` wins
//! over `yy` and `mm` over `m`. Everything else is copied through unchanged.

/// Substitution order. Longer tokens must come before their prefixes.
pub const TOKENS: [&str; 6] = ["yyyy", "yy", "mm", "m", "dd", "d"];

/// Renders a Jalali `(year, month, day)` with `pattern`.
pub fn format_jalali(year: i32, month: u8, day: u8, pattern: &str) -> String {
    let values = [
        format!("{year:04}"),
        format!("{:02}", year % 100),
        format!("{month:02}"),
        month.to_string(),
        format!("{day:02}"),
        day.to_string(),
    ];

    TOKENS
        .iter()
        .zip(values.iter())
        .fold(pattern.to_owned(), |out, (token, value)| {
            if out.contains(token) {
                out.replace(token, value)
            } else {
                out
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_tokens() {
        assert_eq!(format_jalali(1403, 1, 1, "yyyy/mm/dd"), "1403/01/01");
        assert_eq!(format_jalali(1402, 1, 1, "yyyy.mm.dd"), "1402.01.01");
    }

    #[test]
    fn test_short_tokens() {
        assert_eq!(format_jalali(1403, 1, 1, "yy-m-d"), "03-1-1");
        assert_eq!(format_jalali(1401, 7, 18, "d/m/yyyy"), "18/7/1401");
    }

    #[test]
    fn test_year_padding() {
        assert_eq!(format_jalali(979, 1, 1, "yyyy"), "0979");
        assert_eq!(format_jalali(1400, 1, 1, "yy"), "00");
    }

    #[test]
    fn test_literal_text_passes_through() {
        assert_eq!(
            format_jalali(1403, 12, 30, "امروز: yyyy/mm/dd"),
            "امروز: 1403/12/30"
        );
        assert_eq!(format_jalali(1403, 5, 9, "[yyyy] # !"), "[1403] # !");
        assert_eq!(format_jalali(1403, 5, 9, ""), "");
    }

    #[test]
    fn test_repeated_tokens() {
        assert_eq!(format_jalali(1403, 5, 9, "dd dd m m"), "09 09 5 5");
    }

    #[test]
    fn test_longest_token_first() {
        // "yyy" is "yy" followed by a literal "y"
        assert_eq!(format_jalali(1403, 5, 9, "yyy"), "03y");
        // "mmm" is "mm" followed by "m"
        assert_eq!(format_jalali(1403, 5, 9, "mmm"), "055");
    }
}
