//! `MonthKey` — the `"MM-YYYY"` key under which a month's ledger is stored.

use crate::date::{days_in_month, Date, MAX_YEAR, MIN_YEAR};
use crate::day_key::DayKey;
use crate::month::Month;
use dz_core::errors::{Error, Result};
use dz_core::parsers::parse_month_key;
use serde::{Deserialize, Serialize};

/// A (month, year) pair, canonically formatted `"MM-YYYY"`.
///
/// Ordered by year, then month.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: u16,
    month: Month,
}

impl MonthKey {
    /// Create a key from a supported year and a month number (1–12).
    pub fn new(year: u16, month: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::MalformedKey(format!(
                "year {year} outside [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        let month = Month::from_number(month)
            .ok_or_else(|| Error::MalformedKey(format!("month {month} out of range [1, 12]")))?;
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            // Date::month() is always in 1..=12
            month: Month::from_number(date.month()).unwrap_or(Month::January),
        }
    }

    /// The year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The following month (December rolls over into January of the next year).
    ///
    /// # Errors
    /// [`Error::MalformedKey`] after December of the last supported year.
    pub fn next(&self) -> Result<Self> {
        let (month, rolled) = self.month.succ();
        let year = if rolled { self.year + 1 } else { self.year };
        Self::new(year, month.number())
    }

    /// Number of days in this month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month.number())
    }

    /// Every day key of the month, `"01"` up to the last day.
    pub fn day_keys(&self) -> impl Iterator<Item = DayKey> {
        (1..=self.days_in_month()).filter_map(|d| DayKey::new(d).ok())
    }

    /// Whether `day` exists in this month.
    pub fn contains(&self, day: DayKey) -> bool {
        day.number() <= self.days_in_month()
    }

    /// The calendar date of `day` in this month.
    pub fn date(&self, day: DayKey) -> Result<Date> {
        Date::from_ymd(self.year, self.month.number(), day.number())
    }
}

impl std::str::FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (month, year) = parse_month_key(s)
            .ok_or_else(|| Error::MalformedKey(format!("invalid month key {s:?}")))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> String {
        key.to_string()
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:04}", self.month.number(), self.year)
    }
}

impl std::fmt::Debug for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MonthKey({self})")
    }
}
