//! Tolerant parsers for the string keys stored in attendance documents.
//!
//! All functions return `None` instead of an error; the typed constructors in
//! `dz-time` turn that into [`Error::MalformedKey`](crate::Error::MalformedKey)
//! or [`Error::MalformedTime`](crate::Error::MalformedTime).

/// Parse a month key in `MM-YYYY` format.
///
/// Returns `(month, year)` on success.  The month is not range-checked here.
pub fn parse_month_key(s: &str) -> Option<(u8, u16)> {
    let (month, year) = s.trim().split_once('-')?;
    if !is_ascii_number(month, 1, 2) || !is_ascii_number(year, 4, 4) {
        return None;
    }
    Some((month.parse().ok()?, year.parse().ok()?))
}

/// Parse a day-of-month key such as `"05"` or `"5"`.
pub fn parse_day_number(s: &str) -> Option<u8> {
    let s = s.trim();
    if !is_ascii_number(s, 1, 2) {
        return None;
    }
    s.parse().ok()
}

/// Parse a wall-clock time in `HH:MM` format (`H:MM` is accepted as well).
///
/// Returns `(hour, minute)` with `hour < 24` and `minute < 60`.
pub fn parse_clock(s: &str) -> Option<(u8, u8)> {
    let (hour, minute) = s.trim().split_once(':')?;
    if !is_ascii_number(hour, 1, 2) || !is_ascii_number(minute, 2, 2) {
        return None;
    }
    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

fn is_ascii_number(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_key() {
        assert_eq!(parse_month_key("07-2024"), Some((7, 2024)));
        assert_eq!(parse_month_key("7-2024"), Some((7, 2024)));
        assert_eq!(parse_month_key("13-2024"), Some((13, 2024)));
        assert_eq!(parse_month_key("2024-07"), None);
        assert_eq!(parse_month_key("ab-2024"), None);
        assert_eq!(parse_month_key(""), None);
    }

    #[test]
    fn test_parse_day_number() {
        assert_eq!(parse_day_number("05"), Some(5));
        assert_eq!(parse_day_number("31"), Some(31));
        assert_eq!(parse_day_number("5"), Some(5));
        assert_eq!(parse_day_number("-1"), None);
        assert_eq!(parse_day_number("105"), None);
        assert_eq!(parse_day_number("x"), None);
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("04:30"), Some((4, 30)));
        assert_eq!(parse_clock("4:30"), Some((4, 30)));
        assert_eq!(parse_clock("23:59"), Some((23, 59)));
        assert_eq!(parse_clock("24:00"), None);
        assert_eq!(parse_clock("12:60"), None);
        assert_eq!(parse_clock("12"), None);
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("ab:cd"), None);
    }

    proptest::proptest! {
        #[test]
        fn arbitrary_input_never_panics(s in "\\PC{0,12}") {
            let _ = parse_month_key(&s);
            let _ = parse_day_number(&s);
            let _ = parse_clock(&s);
        }

        #[test]
        fn padded_day_keys_parse(day in 1u8..=31) {
            proptest::prop_assert_eq!(parse_day_number(&format!("{day:02}")), Some(day));
        }
    }
}
