//! # dz-time
//!
//! Dates, month and day keys, Easter computation, and public-holiday
//! calendars.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait, day classification, and the weekend-only calendar.
pub mod calendar;

/// Concrete calendar implementations (country specific or user defined).
pub mod calendars;

/// `ClockTime` — a same-day `HH:MM` wall-clock time.
pub mod clock_time;

/// `Date` type.
pub mod date;

/// `DayKey` — the `"DD"` key of a ledger day.
pub mod day_key;

/// Easter Sunday computation.
pub mod easter;

/// Per-year holiday sets and their cache.
pub mod holidays;

/// `Month` — month of the year.
pub mod month;

/// `MonthKey` — the `"MM-YYYY"` key of a ledger month.
pub mod month_key;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, DayKind, WeekendsOnly};
pub use calendars::{BespokeCalendar, Slovakia};
pub use clock_time::ClockTime;
pub use date::Date;
pub use day_key::DayKey;
pub use holidays::{HolidayCache, HolidaySet};
pub use month::Month;
pub use month_key::MonthKey;
pub use weekday::Weekday;
