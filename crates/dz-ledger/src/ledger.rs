//! `DayLedger` — one month of day status codes.

use std::collections::BTreeMap;

use dz_core::errors::{Error, Result};
use dz_core::{ensure, Real};
use dz_time::{Calendar, DayKey, MonthKey};

use crate::day_code::DayCode;

/// The status codes of every day of one month.
///
/// Holds exactly one entry per day of [`DayLedger::month`]: no gaps, no keys
/// beyond the month's last day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLedger {
    month: MonthKey,
    days: BTreeMap<DayKey, DayCode>,
}

impl DayLedger {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// A fresh month: weekends are [`DayCode::Off`], public holidays
    /// [`DayCode::Holiday`], and all other days [`DayCode::WorkFull`].
    pub fn generate(month: MonthKey, calendar: &(impl Calendar + ?Sized)) -> Self {
        let days = month
            .day_keys()
            .map(|day| {
                let code = calendar
                    .classify_day(month, day)
                    .map_or(DayCode::WorkFull, DayCode::default_for);
                (day, code)
            })
            .collect();
        Self { month, days }
    }

    /// A month in which every day carries the same code.
    pub fn filled(month: MonthKey, code: DayCode) -> Self {
        let days = month.day_keys().map(|day| (day, code.clone())).collect();
        Self { month, days }
    }

    /// Build a ledger from stored day codes.
    ///
    /// # Errors
    /// [`Error::MalformedKey`] if a key lies beyond the end of the month, and
    /// [`Error::Precondition`] if any day of the month is missing.
    pub fn from_days(month: MonthKey, days: BTreeMap<DayKey, DayCode>) -> Result<Self> {
        if let Some(day) = days.keys().find(|d| !month.contains(**d)) {
            return Err(Error::MalformedKey(format!(
                "day {day} does not exist in {month}"
            )));
        }
        ensure!(
            days.len() == usize::from(month.days_in_month()),
            "ledger for {month} has {} of {} days",
            days.len(),
            month.days_in_month()
        );
        Ok(Self { month, days })
    }

    // ── Inspectors ───────────────────────────────────────────────────────────

    /// The month this ledger belongs to.
    pub fn month(&self) -> MonthKey {
        self.month
    }

    /// The code recorded for `day`.
    pub fn get(&self, day: DayKey) -> Option<&DayCode> {
        self.days.get(&day)
    }

    /// Whether `day` carries `code`.
    pub fn is(&self, day: DayKey, code: &DayCode) -> bool {
        self.days.get(&day) == Some(code)
    }

    /// Iterate `(day, code)` pairs in day order.
    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &DayCode)> {
        self.days.iter().map(|(d, c)| (*d, c))
    }

    /// Days carrying `code`, ascending.
    pub fn days_with<'a>(&'a self, code: &'a DayCode) -> impl Iterator<Item = DayKey> + 'a {
        self.iter().filter(move |(_, c)| *c == code).map(|(d, _)| d)
    }

    /// Number of days (equals the length of the month).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the ledger has no days.  Never true for a well-formed ledger.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Borrow the underlying map.
    pub fn days(&self) -> &BTreeMap<DayKey, DayCode> {
        &self.days
    }

    /// Consume the ledger, returning the underlying map.
    pub fn into_days(self) -> BTreeMap<DayKey, DayCode> {
        self.days
    }

    /// Total hours for the month, as shown under the timesheet.
    pub fn total_hours(&self) -> Real {
        self.days.values().map(DayCode::worked_hours).sum()
    }

    // ── Modifiers ────────────────────────────────────────────────────────────

    /// Record `code` for `day`, returning the previous code.
    ///
    /// # Errors
    /// [`Error::MalformedKey`] if `day` does not exist in this month.
    pub fn set(&mut self, day: DayKey, code: DayCode) -> Result<Option<DayCode>> {
        if !self.month.contains(day) {
            return Err(Error::MalformedKey(format!(
                "day {day} does not exist in {}",
                self.month
            )));
        }
        Ok(self.days.insert(day, code))
    }
}
