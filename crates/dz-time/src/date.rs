//! `Date` — a proleptic Gregorian calendar date.
//!
//! A date is stored as the number of days since 1970-01-01, so weekday and
//! day arithmetic reduce to integer operations.  Conversion to and from
//! (year, month, day) uses the era-based civil-calendar algorithms, which are
//! exact for every Gregorian date.
//!
//! Supported years are 1900 to 2199; the constructors reject anything else.

use crate::weekday::Weekday;
use chrono::Datelike;
use dz_core::errors::{Error, Result};

/// First supported year.
pub const MIN_YEAR: u16 = 1900;

/// Last supported year.
pub const MAX_YEAR: u16 = 2199;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Create a date from year, month (1–12), and day of the month.
    ///
    /// # Errors
    /// [`Error::Date`] if the year is unsupported or the components do not
    /// name a real date.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} outside [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        let last = days_in_month(year, month);
        if last == 0 {
            return Err(Error::Date(format!("no month {month}")));
        }
        if !(1..=last).contains(&day) {
            return Err(Error::Date(format!("{year}-{month:02} has no day {day}")));
        }
        Ok(Date(epoch_day(year, month, day)))
    }

    /// Convert a `chrono` calendar date.
    pub fn from_naive(date: chrono::NaiveDate) -> Result<Self> {
        let year = u16::try_from(date.year()).map_err(|_| {
            Error::Date(format!("year {} outside [{MIN_YEAR}, {MAX_YEAR}]", date.year()))
        })?;
        // month() is 1..=12 and day() 1..=31
        Self::from_ymd(year, date.month() as u8, date.day() as u8)
    }

    /// Today's date on the local wall clock.
    pub fn today() -> Result<Self> {
        Self::from_naive(chrono::Local::now().date_naive())
    }

    /// Days since 1970-01-01.
    pub fn epoch_day(&self) -> i32 {
        self.0
    }

    /// (year, month, day).
    pub fn ymd(&self) -> (u16, u8, u8) {
        civil(self.0)
    }

    /// The year.
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// The month, 1–12.
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// The day of the month.
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// The day of the week.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_epoch_day(self.0)
    }

    /// The date `n` days later (earlier for negative `n`).
    ///
    /// # Errors
    /// [`Error::Date`] if the result leaves the supported years.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let first = epoch_day(MIN_YEAR, 1, 1);
        let last = epoch_day(MAX_YEAR, 12, 31);
        match self.0.checked_add(n) {
            Some(day) if (first..=last).contains(&day) => Ok(Date(day)),
            _ => Err(Error::Date(format!("{self} + {n} days is out of range"))),
        }
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

/// `DD.MM.YYYY`, as printed on request documents.
impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{d:02}.{m:02}.{y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y}-{m:02}-{d:02})")
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of `month` in `year`; 0 if `month` is not 1–12.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        1..=12 => 31,
        _ => 0,
    }
}

// Years are counted from March so that the leap day ends the year; an era is
// the 400-year Gregorian cycle of 146 097 days.
const DAYS_PER_ERA: i32 = 146_097;
const EPOCH_SHIFT: i32 = 719_468; // 0000-03-01 to 1970-01-01

fn epoch_day(year: u16, month: u8, day: u8) -> i32 {
    let (month, day) = (i32::from(month), i32::from(day));
    let y = i32::from(year) - i32::from(month <= 2);
    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;
    let day_of_year = (153 * ((month + 9) % 12) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
}

fn civil(days: i32) -> (u16, u8, u8) {
    let z = days + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = year_of_era + era * 400 + i32::from(month <= 2);
    // Only dates built by `from_ymd` reach here, all within 1900..=2199.
    (year as u16, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(Date::from_ymd(1970, 1, 1).unwrap().epoch_day(), 0);
        assert_eq!(Date::from_ymd(1970, 1, 2).unwrap().epoch_day(), 1);
        assert_eq!(Date::from_ymd(1969, 12, 31).unwrap().epoch_day(), -1);
    }

    #[test]
    fn components_round_trip() {
        for (y, m, d) in [(1900, 1, 1), (1900, 12, 31), (2000, 2, 29), (2024, 7, 15), (2199, 12, 31)] {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn weekdays() {
        assert_eq!(Date::from_ymd(1900, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(2024, 7, 13).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(Date::from_ymd(2025, 4, 20).unwrap().weekday(), Weekday::Sunday);
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 4, 31).is_err());
        assert!(Date::from_ymd(2024, 4, 0).is_err());
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn add_days_crosses_month() {
        let easter = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(easter.add_days(1).unwrap(), Date::from_ymd(2024, 4, 1).unwrap());
        assert_eq!(easter.add_days(-2).unwrap(), Date::from_ymd(2024, 3, 29).unwrap());
        assert_eq!(easter.days_between(Date::from_ymd(2024, 4, 1).unwrap()), 1);
        assert!(Date::from_ymd(2199, 12, 31).unwrap().add_days(1).is_err());
    }

    #[test]
    fn display() {
        let d = Date::from_ymd(2026, 10, 8).unwrap();
        assert_eq!(d.to_string(), "08.10.2026");
        assert_eq!(format!("{d:?}"), "Date(2026-10-08)");
    }

    #[test]
    fn from_chrono() {
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(Date::from_naive(naive).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
    }
}
