//! `Calendar` trait and the weekend-only calendar.
//!
//! A calendar knows which dates are weekends and which are public holidays.
//! The `*_on` and `*_key` methods accept raw components or keys taken from
//! user-editable documents and answer `false` for anything that does not name
//! a real date.

use std::sync::Arc;

use crate::date::Date;
use crate::day_key::DayKey;
use crate::holidays::HolidaySet;
use crate::month_key::MonthKey;
use crate::weekday::Weekday;

/// Classification of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// Monday–Friday that is not a public holiday.
    Workday,
    /// Saturday or Sunday (takes precedence over a holiday on the same date).
    Weekend,
    /// A public holiday falling on Monday–Friday.
    Holiday,
}

/// A public-holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Slovakia"`).
    fn name(&self) -> &str;

    /// The public holidays of `year`.
    fn holidays_for_year(&self, year: u16) -> Arc<HolidaySet>;

    /// Return `true` if `date` is a public holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holidays_for_year(date.year())
            .contains(date.month(), date.day_of_month())
    }

    /// Return `true` if `date` falls on Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is a Sunday.  Used for display emphasis only.
    fn is_sunday(&self, date: Date) -> bool {
        date.weekday() == Weekday::Sunday
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Classify `date` as weekend, holiday, or workday.
    fn classify(&self, date: Date) -> DayKind {
        if self.is_weekend(date) {
            DayKind::Weekend
        } else if self.is_holiday(date) {
            DayKind::Holiday
        } else {
            DayKind::Workday
        }
    }

    // ── Tolerant variants ────────────────────────────────────────────────────

    /// Weekend check from raw components; `false` for an invalid date.
    fn is_weekend_on(&self, year: u16, month: u8, day: u8) -> bool {
        Date::from_ymd(year, month, day).is_ok_and(|d| self.is_weekend(d))
    }

    /// Holiday check from raw components; `false` for an invalid date.
    fn is_holiday_on(&self, year: u16, month: u8, day: u8) -> bool {
        Date::from_ymd(year, month, day).is_ok_and(|d| self.is_holiday(d))
    }

    /// Sunday check from raw components; `false` for an invalid date.
    fn is_sunday_on(&self, year: u16, month: u8, day: u8) -> bool {
        Date::from_ymd(year, month, day).is_ok_and(|d| self.is_sunday(d))
    }

    /// Weekend check for a ledger day; `false` if the day is not in the month.
    fn is_weekend_day(&self, month: MonthKey, day: DayKey) -> bool {
        month.date(day).is_ok_and(|d| self.is_weekend(d))
    }

    /// Holiday check for a ledger day; `false` if the day is not in the month.
    fn is_holiday_day(&self, month: MonthKey, day: DayKey) -> bool {
        month.date(day).is_ok_and(|d| self.is_holiday(d))
    }

    /// Whether a ledger day is a workday.  Days outside the month are not.
    fn is_workday(&self, month: MonthKey, day: DayKey) -> bool {
        month.date(day).is_ok_and(|d| self.is_business_day(d))
    }

    /// Classify a ledger day; `None` if the day is not in the month.
    fn classify_day(&self, month: MonthKey, day: DayKey) -> Option<DayKind> {
        month.date(day).ok().map(|d| self.classify(d))
    }

    /// Weekend check from string keys (`"MM-YYYY"`, `"DD"`); `false` if either
    /// key is malformed.
    fn is_weekend_key(&self, month_key: &str, day_key: &str) -> bool {
        match (month_key.parse::<MonthKey>(), day_key.parse::<DayKey>()) {
            (Ok(m), Ok(d)) => self.is_weekend_day(m, d),
            _ => false,
        }
    }

    /// Holiday check from string keys; `false` if either key is malformed.
    fn is_holiday_key(&self, month_key: &str, day_key: &str) -> bool {
        match (month_key.parse::<MonthKey>(), day_key.parse::<DayKey>()) {
            (Ok(m), Ok(d)) => self.is_holiday_day(m, d),
            _ => false,
        }
    }
}

/// A calendar that treats only Saturdays and Sundays as non-working days,
/// with no public holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn holidays_for_year(&self, year: u16) -> Arc<HolidaySet> {
        Arc::new(HolidaySet::new(year))
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}
