//! `DayKey` — the zero-padded day-of-month key of a day ledger.

use dz_core::errors::{Error, Result};
use dz_core::parsers::parse_day_number;
use serde::{Deserialize, Serialize};

/// A day of the month, `1..=31`, written as a two-digit string (`"01"`..`"31"`).
///
/// Ordering is numeric.  Whether the day exists in a particular month is
/// checked by [`MonthKey::date`](crate::MonthKey::date), not here.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(u8);

impl DayKey {
    /// Create a key from a day number in `1..=31`.
    pub fn new(day: u8) -> Result<Self> {
        if (1..=31).contains(&day) {
            Ok(DayKey(day))
        } else {
            Err(Error::MalformedKey(format!("day {day} out of range [1, 31]")))
        }
    }

    /// The day number.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Every key from `start` to `end` inclusive; empty when `start > end`.
    pub fn span(start: DayKey, end: DayKey) -> impl Iterator<Item = DayKey> {
        (start.0..=end.0).map(DayKey)
    }

    /// Every key strictly between `a` and `b` (`a < b`); empty otherwise.
    pub fn between(a: DayKey, b: DayKey) -> impl Iterator<Item = DayKey> {
        (a.0.saturating_add(1)..b.0).map(DayKey)
    }
}

impl std::str::FromStr for DayKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_day_number(s)
            .ok_or_else(|| Error::MalformedKey(format!("invalid day key {s:?}")))
            .and_then(DayKey::new)
    }
}

impl TryFrom<String> for DayKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> String {
        key.to_string()
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl std::fmt::Debug for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DayKey({:02})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(d: u8) -> DayKey {
        DayKey::new(d).unwrap()
    }

    #[test]
    fn parse_and_format() {
        assert_eq!("05".parse::<DayKey>().unwrap(), key(5));
        assert_eq!("5".parse::<DayKey>().unwrap().to_string(), "05");
        assert!(matches!("00".parse::<DayKey>(), Err(Error::MalformedKey(_))));
        assert!(matches!("32".parse::<DayKey>(), Err(Error::MalformedKey(_))));
        assert!(matches!("ab".parse::<DayKey>(), Err(Error::MalformedKey(_))));
    }

    #[test]
    fn numeric_ordering() {
        assert!(key(9) < key(10));
    }

    #[test]
    fn span_and_between() {
        let span: Vec<u8> = DayKey::span(key(10), key(12)).map(|d| d.number()).collect();
        assert_eq!(span, vec![10, 11, 12]);
        assert_eq!(DayKey::span(key(12), key(10)).count(), 0);

        let gap: Vec<u8> = DayKey::between(key(5), key(9)).map(|d| d.number()).collect();
        assert_eq!(gap, vec![6, 7, 8]);
        assert_eq!(DayKey::between(key(5), key(6)).count(), 0);
        assert_eq!(DayKey::between(key(9), key(5)).count(), 0);
    }

    #[test]
    fn serde_as_string() {
        assert_eq!(serde_json::to_string(&key(7)).unwrap(), "\"07\"");
        assert_eq!(serde_json::from_str::<DayKey>("\"31\"").unwrap(), key(31));
        assert!(serde_json::from_str::<DayKey>("\"x1\"").is_err());
    }
}
