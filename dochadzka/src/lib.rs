//! # dochadzka
//!
//! Attendance tracking: per-month day ledgers classified against the Slovak
//! public-holiday calendar, detection of business-trip and vacation periods,
//! their additive synchronization with stored records, and the per-diem and
//! working-day figures printed on travel and vacation documents.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on it rather than on the `dz-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use dochadzka::ledger::{DayCode, DayLedger};
//! use dochadzka::ranges::{RangeSynchronizer, TripConfig};
//! use dochadzka::time::{Date, DayKey, MonthKey, Slovakia};
//!
//! let calendar = Slovakia::new();
//! let july: MonthKey = "07-2024".parse()?;
//! let mut ledger = DayLedger::generate(july, &calendar);
//! ledger.set(DayKey::new(16)?, DayCode::Trip)?;
//!
//! let config = TripConfig::default();
//! let sync = RangeSynchronizer::new(&calendar, &config, Date::from_ymd(2024, 7, 31)?);
//! let trips = sync.sync_trips(&ledger, &[]);
//! assert_eq!(trips[0].id, "16-16-07-2024");
//! # Ok::<(), dochadzka::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases, errors, and parsers.
pub use dz_core as core;

/// Dates, keys, Easter, and holiday calendars.
pub use dz_time as time;

/// Day codes, ledgers, and block detection.
pub use dz_ledger as ledger;

/// Range records, synchronization, accounting, and the attendance book.
pub use dz_ranges as ranges;
