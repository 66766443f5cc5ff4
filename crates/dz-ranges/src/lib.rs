//! # dz-ranges
//!
//! Trip and vacation range records derived from day ledgers: the records
//! themselves, the additive synchronizer that proposes new ones, the per-diem
//! and working-day accounting built on them, and the persisted
//! [`AttendanceBook`] document that ties months, records, and configuration
//! together.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Per-diem and working-day derivations.
pub mod accounting;

/// `AttendanceBook` and `MonthSheet`.
pub mod book;

/// Trip configuration and per-diem rates.
pub mod config;

/// Range records and their ids.
pub mod record;

/// Block-to-record synchronization.
pub mod sync;

pub use accounting::{clock_hours, hours_between, per_diem, working_days, TripLeg, TripStatement};
pub use book::{AttendanceBook, MonthSheet, SyncSummary};
pub use config::{PerDiemRates, TripConfig};
pub use record::{
    make_id, RangeDetails, RangeKind, RangeRecord, TripDetails, TripRecord, VacationDetails,
    VacationRecord,
};
pub use sync::RangeSynchronizer;
